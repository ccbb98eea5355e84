//! `framework-arduino-k210`: the Arduino core for the K210. The install
//! vendors the Kendryte standalone SDK under `cores/k210/k210-sdk` and ships
//! prebuilt archives under `libs`.

use crate::frameworks::{CoreLib, DefineValue, FrameworkOptions};

pub(crate) const OPTIONS: FrameworkOptions = FrameworkOptions {
    name: "arduino-k210",
    // The vendored SDK and the NNCase runtime are not clean under the core's
    // warning set; demote the offenders so -Werror builds survive.
    cc_flags: &[
        "-Wno-error=unused-const-variable",
        "-Wno-error=narrowing",
        "-Wno-error=unused-value",
    ],
    defines: &[
        ("ARDUINO", DefineValue::Fixed("10805")),
        ("ARDUINO_VARIANT", DefineValue::Variant),
        ("ARDUINO_BOARD", DefineValue::BoardDef),
        ("NNCASE_TARGET", DefineValue::Fixed("k210")),
        ("TCB_SPAN_NO_EXCEPTIONS", DefineValue::None),
        ("TCB_SPAN_NO_CONTRACT_CHECKING", DefineValue::None),
    ],
    include_dirs: &[
        "cores/k210",
        "cores/k210/k210-hal",
        "cores/k210/k210-hal/include",
        "cores/k210/k210-sdk/lib/bsp",
        "cores/k210/k210-sdk/lib/bsp/include",
        "cores/k210/k210-sdk/lib/drivers",
        "cores/k210/k210-sdk/lib/drivers/include",
        "cores/k210/k210-sdk/lib/freertos",
        "cores/k210/k210-sdk/lib/freertos/include",
        "cores/k210/k210-sdk/lib/freertos/portable",
        "cores/k210/k210-sdk/lib/freertos/conf",
        "cores/k210/k210-sdk/lib/utils/include",
        "cores/k210/k210-sdk/lib/nncase",
        "cores/k210/k210-sdk/lib/nncase/include",
        "cores/k210/k210-sdk/lib/nncase/runtime",
        "cores/k210/k210-sdk/third_party/xtl/include",
    ],
    lib_dirs: &[],
    libs: &["c", "gcc", "m"],
    // libc, libgcc and libm refer into each other; keep them in one group.
    link_flags: &["-Wl,--start-group", "-lc", "-lgcc", "-lm", "-Wl,--end-group"],
    default_ldscript: "cores/k210/k210-sdk/lds/kendryte.ld",
    prebuilt_lib_dir: Some("libs"),
    lib_source_dirs: &["libraries"],
    core_lib: CoreLib {
        name: "FrameworkArduinok210",
        source_dir: "cores/k210",
        src_filter: &[
            "+<*>",
            "-<.git/>",
            "-<.svn/>",
            "-<kendryte-standalone-sdk/src/hello_world/>",
        ],
    },
};
