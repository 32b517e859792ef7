// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Count Sketch projection of dense matrices.
//!
//! A Count Sketch compresses a tall `nrow x ncol` matrix into a short
//! `m x ncol` matrix while approximately preserving the norms and inner
//! products of the original column space. Each input row is hashed to one
//! of `m` output rows and accumulated there after multiplication by a
//! random sign. The bucket and sign assignments are supplied by the
//! caller, precomputed; this crate applies them.
//!
//! # Usage
//!
//! ```rust
//! use countsketch::matrix::DenseMatrix;
//! use countsketch::projection::CountSketch;
//!
//! let input = DenseMatrix::from_rows(vec![
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//!     vec![5.0, 6.0],
//! ])
//! .unwrap();
//!
//! // Bucket ids are 1-based; signs are integer coefficients.
//! let sketch = CountSketch::new(2, &[1, 2, 1], &[1, -1, 1]).unwrap();
//! let output = sketch.project(&input).unwrap();
//!
//! assert_eq!(output.row(0), &[6.0, 8.0]);
//! assert_eq!(output.row(1), &[-3.0, -4.0]);
//! ```

pub mod common;
pub mod error;
pub mod matrix;
pub mod projection;
