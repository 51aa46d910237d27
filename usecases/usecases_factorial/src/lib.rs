//! Use Cases Layer: Factorial
//!
//! Provides exact factorials of arbitrary magnitude.
//!
//! ## Overview
//!
//! `n!` outgrows every native integer type at `n = 21` for `u64` and at
//! `n = 35` for `u128`. The `usecases_factorial` crate accumulates the product
//! in machine words while they fit and folds each full word into a
//! `BigNumber` from the Entities layer, so the result is exact for any `n`
//! that fits in memory.
//!
//! ## Modules
//!
//! - **[`factorial`](factorial/index.html)**: Factorial computation with an
//!   optional input cap
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html): BigNumber type

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod factorial;

pub use factorial::{Factorial, FactorialError};
