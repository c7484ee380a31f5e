// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod counters;

pub use counters::{
    MessageResponse, create_counter, delete_counter, get_counter, update_counter,
};
