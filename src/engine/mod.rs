// Copyright (c) Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod classify;
pub mod predicate;
pub mod search;
pub mod window;

pub use aggregate::aggregate;
pub use classify::{Classification, classify};
pub use predicate::Predicate;
pub use search::{SearchOutcome, search};
pub use window::{DateWindow, resolve_window};
