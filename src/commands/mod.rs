// Copyright (c) Officina Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod config;
pub mod exporter;
pub mod fetch;
pub mod importer;
pub mod search;
