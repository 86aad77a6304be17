/// Returns the default stty blocklist of (pattern, reason) tuples.
///
/// Only chained or leading `dd` is dangerous: stty line flags such as
/// `parodd` and `parenb` contain "dd" and must never match. Patterns are
/// applied case-insensitively by the filter.
pub fn default_blocklist() -> Vec<(String, String)> {
    vec![
        // Destructive file operations anywhere in the command
        (r"rm\s+".into(), "File deletion (rm) not allowed".into()),
        (r"del\s+".into(), "File deletion (del) not allowed".into()),
        (r"format\s+".into(), "Disk formatting (format) not allowed".into()),
        (r"mkfs\s+".into(), "Filesystem creation (mkfs) not allowed".into()),
        // dd only when chained onto or replacing the stty invocation
        (r";\s*dd\s+".into(), "dd chained after ';' not allowed".into()),
        (r"&&\s*dd\s+".into(), "dd chained after '&&' not allowed".into()),
        (r"\|\s*dd\s+".into(), "dd on the receiving end of a pipe not allowed".into()),
        (r"^\s*dd\s+".into(), "Standalone dd invocation not allowed".into()),
        // Device-node writes
        (r">\s*/dev/".into(), "Redirect into /dev not allowed".into()),
        // rm chained onto the stty invocation
        (r";\s*rm\s+".into(), "rm chained after ';' not allowed".into()),
        (r"&&\s*rm\s+".into(), "rm chained after '&&' not allowed".into()),
        (r"\|\s*rm\s+".into(), "rm on the receiving end of a pipe not allowed".into()),
    ]
}
