//! Flags shared by every K210 toolchain invocation, regardless of which
//! framework package backs the build. rv64imafc with the single-float LP64F
//! ABI and the medany code model is the Kendryte toolchain convention.

pub(crate) const CC_FLAGS: &[&str] = &[
    "-march=rv64imafc",
    "-mabi=lp64f",
    "-mcmodel=medany",
    "-fno-common",
    "-ffunction-sections",
    "-fdata-sections",
    "-fstrict-volatile-bitfields",
    "-Os",
    "-Wall",
];

pub(crate) const LINK_FLAGS: &[&str] = &[
    "-march=rv64imafc",
    "-mabi=lp64f",
    "-mcmodel=medany",
    "-nostartfiles",
    "-static",
    "-Wl,--gc-sections",
];
