// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level pages, one per route.

pub mod home;
pub mod regist_user;
