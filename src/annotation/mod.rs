//! Classification, styling and legend pipeline for analyzed tokens.
//!
//! Everything here is a pure function of the raw tokens and the current
//! [`Mode`]; switching modes simply re-runs [`classify`].

pub mod assemble;
pub mod classify;
pub mod format;
pub mod label;
pub mod legend;
pub mod mode;
pub mod style;
pub mod token;

pub use assemble::{assemble, reconstruct_text, RenderFragment};
pub use classify::classify;
pub use format::format_label;
pub use label::{Label, SimpleCategory};
pub use legend::{aggregate_categories, legend_entries, LegendEntry};
pub use mode::{Mode, ModeStrategy};
pub use style::{resolve_style, StyleDescriptor, StyleFragment};
pub use token::{Morphology, ProcessedToken, Token};
