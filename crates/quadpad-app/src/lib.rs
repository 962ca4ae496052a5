// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod keypad;
pub mod model;
pub mod result;

pub use keypad::*;
pub use model::*;
pub use result::*;
