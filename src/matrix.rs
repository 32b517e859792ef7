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

//! Dense row-major matrix of `f64` values.

use crate::error::Error;
use crate::error::ErrorKind;

/// A dense matrix stored in row-major order.
///
/// Rows are contiguous in memory, so streaming a row into another row is a
/// linear pass over two slices. A matrix may have zero rows, zero columns,
/// or both.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    num_rows: usize,
    num_columns: usize,
    /// Row-major values, length `num_rows * num_columns`.
    values: Vec<f64>,
}

impl DenseMatrix {
    /// Creates an all-zero matrix of the given shape.
    pub fn zeros(num_rows: usize, num_columns: usize) -> Self {
        Self {
            num_rows,
            num_columns,
            values: vec![0.0; num_rows * num_columns],
        }
    }

    /// Creates a matrix from row-major values.
    ///
    /// Errors with [`ErrorKind::ShapeMismatch`] when the value count does
    /// not equal `num_rows * num_columns`.
    pub fn from_row_major(
        num_rows: usize,
        num_columns: usize,
        values: Vec<f64>,
    ) -> Result<Self, Error> {
        if values.len() != num_rows * num_columns {
            return Err(Error::new(
                ErrorKind::ShapeMismatch,
                "value count does not match the matrix shape",
            )
            .with_context("num_rows", num_rows)
            .with_context("num_columns", num_columns)
            .with_context("values", values.len()));
        }
        Ok(Self {
            num_rows,
            num_columns,
            values,
        })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// The column count is taken from the first row; an empty list yields a
    /// `0 x 0` matrix. Errors with [`ErrorKind::ShapeMismatch`] naming the
    /// offending row when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let num_rows = rows.len();
        let num_columns = rows.first().map_or(0, Vec::len);

        let mut values = Vec::with_capacity(num_rows * num_columns);
        for (row, row_values) in rows.iter().enumerate() {
            if row_values.len() != num_columns {
                return Err(Error::new(
                    ErrorKind::ShapeMismatch,
                    "row length does not match the first row",
                )
                .with_context("row", row)
                .with_context("row_length", row_values.len())
                .with_context("num_columns", num_columns));
            }
            values.extend_from_slice(row_values);
        }

        Ok(Self {
            num_rows,
            num_columns,
            values,
        })
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Returns true if the matrix holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_rows`.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.num_rows, "row index out of bounds");
        let start = row * self.num_columns;
        &self.values[start..start + self.num_columns]
    }

    /// Returns one row as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_rows`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        assert!(row < self.num_rows, "row index out of bounds");
        let start = row * self.num_columns;
        &mut self.values[start..start + self.num_columns]
    }

    /// Returns a single value.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_rows` or `column >= num_columns`.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        assert!(row < self.num_rows, "row index out of bounds");
        assert!(column < self.num_columns, "column index out of bounds");
        self.values[row * self.num_columns + column]
    }

    /// Returns all values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
