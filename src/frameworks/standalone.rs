//! `framework-kendryte-standalone-sdk`: the bare-metal SDK, compiled from
//! source out of its `lib` tree.

use crate::frameworks::{CoreLib, DefineValue, FrameworkOptions};

pub(crate) const OPTIONS: FrameworkOptions = FrameworkOptions {
    name: "kendryte-standalone-sdk",
    cc_flags: &[],
    defines: &[
        ("F_CPU", DefineValue::FCpu),
        ("CONFIG_LOG_ENABLE", DefineValue::None),
        ("CONFIG_LOG_COLORS", DefineValue::None),
        ("CONFIG_LOG_LEVEL", DefineValue::Fixed("LOG_INFO")),
    ],
    include_dirs: &["lib/bsp/include", "lib/drivers/include", "lib/utils/include"],
    lib_dirs: &["lds"],
    libs: &["m"],
    link_flags: &[],
    default_ldscript: "lds/kendryte.ld",
    prebuilt_lib_dir: None,
    lib_source_dirs: &[],
    core_lib: CoreLib {
        name: "FrameworkKendryteStandalone",
        source_dir: "lib",
        src_filter: &["+<*>", "-<.git/>"],
    },
};
