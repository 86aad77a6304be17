//! Fixture commands for the blocklist smoke-test.
//!
//! These are real stty invocations the S7Tools serial console issues, plus
//! the injection attempts the blocklist exists to stop. The fourth valid
//! fixture carries `parenb parodd` to pin the "dd inside a flag name is not
//! dd" behavior.

/// stty commands that must pass the default blocklist.
pub const EXPECTED_VALID: &[&str] = &[
    "stty -F /dev/ttyUSB0 cs8 9600 -ignbrk brkint -icrnl imaxbel ixon opost onlcr isig icanon iexten echo echoe echok echoctl echoke crtscts -parodd -parenb",
    "stty -F /dev/ttyACM0 cs7 115200 raw",
    "stty -F /dev/ttyS0 cs8 38400 -echo",
    "stty -F /dev/ttyUSB1 cs8 9600 parenb parodd",
];

/// Commands that must be blocked by the default blocklist.
pub const EXPECTED_BLOCKED: &[&str] = &[
    "stty -F /dev/ttyUSB0 cs8 9600; dd if=/dev/zero of=/dev/sda",
    "stty -F /dev/ttyUSB0 cs8 9600 && dd if=/dev/zero of=/dev/sda",
    "stty -F /dev/ttyUSB0 cs8 9600 | dd if=/dev/zero of=/dev/sda",
    "dd if=/dev/zero of=/dev/sda",
    "stty -F /dev/ttyUSB0 cs8 9600; rm -rf /",
];
