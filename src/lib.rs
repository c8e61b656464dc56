//! Sample objects for a host that inspects values, enumerations and
//! generic methods.
//!
//! The leaves are independent: [`build_sample()`] builds a nested
//! heterogeneous [`Value`], [`WeekdayFlags`] and [`RangeBound`] are the two
//! enumerations, and [`generic`] holds the generic methods.

mod error;
pub use error::{Error, Result};

pub mod model;
pub use model::{Value, type_name_of};

mod sample;
pub use sample::{build_sample, FIGURE_LABEL, AXIS_LABEL, PLOT_DATA};

mod days;
pub use days::{Weekday, WeekdayFlags};

mod range;
pub use range::{RangeBound};

pub mod generic;
pub use generic::{identity, select_by_flag, SampleClass, SampleGenericClass};

pub mod shell;
