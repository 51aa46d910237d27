//! Entities Layer: Numeric
//!
//! Provides the value types shared by every other layer:
//! - Big number arithmetic (add, multiply, divmod)
//! - Positional radix
//! - Digit sequences (least-significant first)
//! - Arithmetic errors
//!
//! Depends on nothing but `malachite`.

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

pub mod big;
pub mod digits;
pub mod error;
pub mod radix;

pub use big::BigNumber;
pub use digits::DigitSequence;
pub use error::ArithmeticError;
pub use radix::Radix;
