//! `framework-kendryte-freertos-sdk`: the FreeRTOS SDK, compiled from source
//! out of its `lib` tree. The SDK is C++ inside, hence libatomic.

use crate::frameworks::{CoreLib, DefineValue, FrameworkOptions};

pub(crate) const OPTIONS: FrameworkOptions = FrameworkOptions {
    name: "kendryte-freertos-sdk",
    cc_flags: &[],
    defines: &[("F_CPU", DefineValue::FCpu)],
    include_dirs: &[
        "lib/arch/include",
        "lib/bsp/include",
        "lib/drivers/include",
        "lib/freertos/include",
        "lib/freertos/portable",
        "lib/utils/include",
    ],
    lib_dirs: &["lds"],
    libs: &["m", "atomic"],
    link_flags: &[],
    default_ldscript: "lds/kendryte.ld",
    prebuilt_lib_dir: None,
    lib_source_dirs: &[],
    core_lib: CoreLib {
        name: "FrameworkKendryteFreertos",
        source_dir: "lib",
        src_filter: &["+<*>", "-<.git/>"],
    },
};
