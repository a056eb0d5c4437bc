/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod bin_prefix;
pub mod prefixed;
pub mod si_prefix;

pub use bin_prefix::BinPrefix;
pub use prefixed::*;
pub use si_prefix::SiPrefix;
