use super::{Value};

/// The caption of the figure in [`build_sample()`].
pub const FIGURE_LABEL: &str = "Figure Showing New Graph Data";

/// The axis label in [`build_sample()`].
pub const AXIS_LABEL: &str = "X-Axis Label";

/// The plotted numbers in [`build_sample()`].
pub const PLOT_DATA: [f64; 7] = [18.0, 32.0, 3.133, 44.0, -9.9, -13.0, 33.03];

/// Constructs a container that holds another container:
///
/// ```text
/// {'Figure Showing New Graph Data', {'X-Axis Label', [18 32 3.133 44 -9.9 -13 33.03]}}
/// ```
///
/// Every call returns a fresh, structurally equal value.
pub fn build_sample() -> Value {
    let plot_data = Value::from([Value::from(AXIS_LABEL), Value::from(PLOT_DATA)]);
    Value::from([Value::from(FIGURE_LABEL), plot_data])
}

// ----------------------------------------------------------------------------
