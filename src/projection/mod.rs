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

//! Count Sketch projection for dense matrices.
//!
//! The projection maps each input row to one of `num_buckets` output rows
//! and accumulates a signed copy of the row there. The per-row bucket and
//! sign assignment is supplied by the caller; bucket ids use the upstream
//! generators' 1-based convention and are converted internally.
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
//! let sketch = CountSketch::new(2, &[1, 2, 1], &[1, -1, 1]).unwrap();
//! let output = sketch.project(&input).unwrap();
//!
//! assert_eq!(output.row(0), &[6.0, 8.0]);
//! assert_eq!(output.row(1), &[-3.0, -4.0]);
//! ```
//!
//! # Single-call form
//!
//! ```rust
//! use countsketch::matrix::DenseMatrix;
//! use countsketch::projection::sketch;
//!
//! let input = DenseMatrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
//! let output = sketch(&input, &[1, 1], &[1, 1], 1).unwrap();
//!
//! assert_eq!(output.row(0), &[3.0]);
//! ```

mod sketch;

pub use self::sketch::CountSketch;
pub use self::sketch::sketch;
