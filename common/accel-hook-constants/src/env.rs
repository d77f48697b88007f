/// Container environment variable selecting the accelerator devices.
pub const ACCELERATOR_DEVICES: &str = "ACCELERATOR_DEVICES";

/// Container environment variable restricting the accelerator functions.
pub const ACCELERATOR_FUNCTIONS: &str = "ACCELERATOR_FUNCTIONS";

/// `ACCELERATOR_DEVICES` values that explicitly disable accelerator setup.
pub const DEVICES_DISABLED: [&str; 2] = ["void", "none"];
