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

use crate::error::Error;
use crate::error::ErrorKind;
use crate::matrix::DenseMatrix;

/// A validated Count Sketch assignment.
///
/// Holds one per-row (bucket, sign) assignment for inputs with a fixed row
/// count, and projects any matrix with that many rows into `num_buckets`
/// rows. Bucket ids are 1-based on input, following the convention of the
/// upstream hash generators, and stored 0-based.
///
/// Signs are arbitrary integer coefficients. The standard Count Sketch
/// draws them from `{+1, -1}`, but the projection itself places no such
/// restriction, so weighted variants work unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CountSketch {
    /// Output row count (`m`).
    num_buckets: usize,
    /// 0-based bucket index per input row, each in `[0, num_buckets)`.
    buckets: Vec<usize>,
    /// Integer coefficient per input row.
    signs: Vec<i64>,
}

impl CountSketch {
    /// Creates a sketch from a 1-based bucket assignment and a sign
    /// assignment.
    ///
    /// Both slices must have the same length, one entry per input row, and
    /// every bucket id must lie in `1..=num_buckets`. Validation happens
    /// here, before any projection can touch an output row, so a malformed
    /// assignment can never cause an out-of-bounds accumulation.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::ShapeMismatch`] when the slice lengths differ.
    /// - [`ErrorKind::BucketOutOfRange`] when a bucket id is not in
    ///   `1..=num_buckets`; the error names the row, the id, and the valid
    ///   range. With `num_buckets == 0` every id is rejected.
    pub fn new(num_buckets: usize, buckets: &[i64], signs: &[i64]) -> Result<Self, Error> {
        if buckets.len() != signs.len() {
            return Err(Error::new(
                ErrorKind::ShapeMismatch,
                "bucket and sign assignments must have the same length",
            )
            .with_context("buckets", buckets.len())
            .with_context("signs", signs.len()));
        }

        let mut zero_based = Vec::with_capacity(buckets.len());
        for (row, &id) in buckets.iter().enumerate() {
            if id < 1 || id as u64 > num_buckets as u64 {
                return Err(Error::new(
                    ErrorKind::BucketOutOfRange,
                    "bucket id is outside the valid range",
                )
                .with_context("row", row)
                .with_context("bucket", id)
                .with_context("valid_range", format!("1..={num_buckets}")));
            }
            zero_based.push((id - 1) as usize);
        }

        Ok(Self {
            num_buckets,
            buckets: zero_based,
            signs: signs.to_vec(),
        })
    }

    /// Returns the output row count (`m`).
    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    /// Returns the number of input rows the assignment covers.
    pub fn num_input_rows(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the 0-based bucket index for an input row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_input_rows`.
    pub fn bucket(&self, row: usize) -> usize {
        self.buckets[row]
    }

    /// Returns the sign coefficient for an input row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_input_rows`.
    pub fn sign(&self, row: usize) -> i64 {
        self.signs[row]
    }

    /// Projects a matrix into `num_buckets` rows.
    ///
    /// Allocates a zeroed `num_buckets x input.num_columns()` matrix, then
    /// for each input row `i` in increasing order adds
    /// `sign(i) * input.row(i)` elementwise into the output row
    /// `bucket(i)`. Increasing row order makes repeated projections
    /// bit-for-bit identical even where floating-point addition would not
    /// commute.
    ///
    /// The input is only read; the output is freshly allocated and returned.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::ShapeMismatch`] when the input row count differs from
    /// [`Self::num_input_rows`]. Detected before any accumulation, so no
    /// partial result is ever observable.
    pub fn project(&self, input: &DenseMatrix) -> Result<DenseMatrix, Error> {
        if input.num_rows() != self.buckets.len() {
            return Err(Error::new(
                ErrorKind::ShapeMismatch,
                "input row count does not match the assignment",
            )
            .with_context("input_rows", input.num_rows())
            .with_context("assignment_rows", self.buckets.len()));
        }

        let mut output = DenseMatrix::zeros(self.num_buckets, input.num_columns());
        for (row, (&bucket, &sign)) in self.buckets.iter().zip(self.signs.iter()).enumerate() {
            let coefficient = sign as f64;
            let source = input.row(row);
            let destination = output.row_mut(bucket);
            for (accumulated, value) in destination.iter_mut().zip(source) {
                *accumulated += coefficient * value;
            }
        }
        Ok(output)
    }
}

/// Computes a Count Sketch projection in a single call.
///
/// Equivalent to building a [`CountSketch`] from `buckets` (1-based ids)
/// and `signs`, then projecting `input`. On any error no output is
/// returned.
///
/// # Errors
///
/// Same taxonomy as [`CountSketch::new`] and [`CountSketch::project`].
pub fn sketch(
    input: &DenseMatrix,
    buckets: &[i64],
    signs: &[i64],
    num_buckets: usize,
) -> Result<DenseMatrix, Error> {
    CountSketch::new(num_buckets, buckets, signs)?.project(input)
}
