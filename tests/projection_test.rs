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

use countsketch::common::RandomSource;
use countsketch::common::XorShift64;
use countsketch::matrix::DenseMatrix;
use countsketch::projection::CountSketch;
use countsketch::projection::sketch;

fn random_matrix(rng: &mut XorShift64, num_rows: usize, num_columns: usize) -> DenseMatrix {
    let values = (0..num_rows * num_columns)
        .map(|_| rng.next_f64() * 2.0 - 1.0)
        .collect();
    DenseMatrix::from_row_major(num_rows, num_columns, values).unwrap()
}

fn random_assignment(
    rng: &mut XorShift64,
    num_rows: usize,
    num_buckets: usize,
) -> (Vec<i64>, Vec<i64>) {
    let buckets = (0..num_rows)
        .map(|_| 1 + rng.next_range(num_buckets as u64) as i64)
        .collect();
    let signs = (0..num_rows)
        .map(|_| if rng.next_bool() { 1 } else { -1 })
        .collect();
    (buckets, signs)
}

fn assert_matrices_close(left: &DenseMatrix, right: &DenseMatrix, tolerance: f64) {
    assert_eq!(left.num_rows(), right.num_rows());
    assert_eq!(left.num_columns(), right.num_columns());
    for (a, b) in left.values().iter().zip(right.values()) {
        assert!(
            (a - b).abs() <= tolerance,
            "values differ beyond tolerance: {a} vs {b}"
        );
    }
}

/// Reference implementation: per-element accumulation in the same row order.
fn naive_sketch(
    input: &DenseMatrix,
    buckets: &[i64],
    signs: &[i64],
    num_buckets: usize,
) -> DenseMatrix {
    let mut output = DenseMatrix::zeros(num_buckets, input.num_columns());
    for row in 0..input.num_rows() {
        let bucket = (buckets[row] - 1) as usize;
        for column in 0..input.num_columns() {
            output.row_mut(bucket)[column] += signs[row] as f64 * input.get(row, column);
        }
    }
    output
}

#[test]
fn output_shape_matches_for_all_sizes() {
    let mut rng = XorShift64::seeded(0xC0117);
    for &(num_rows, num_columns, num_buckets) in
        &[(1, 1, 1), (10, 4, 3), (50, 7, 8), (0, 5, 4), (6, 0, 2)]
    {
        let input = random_matrix(&mut rng, num_rows, num_columns);
        let (buckets, signs) = random_assignment(&mut rng, num_rows, num_buckets);
        let output = sketch(&input, &buckets, &signs, num_buckets).unwrap();
        assert_eq!(output.num_rows(), num_buckets);
        assert_eq!(output.num_columns(), num_columns);
    }
}

#[test]
fn empty_input_yields_zero_matrix() {
    let input = DenseMatrix::zeros(0, 6);
    let output = sketch(&input, &[], &[], 9).unwrap();
    assert_eq!(output, DenseMatrix::zeros(9, 6));
}

#[test]
fn matches_naive_reference() {
    let mut rng = XorShift64::seeded(0x5EED);
    for _ in 0..20 {
        let num_rows = 1 + rng.next_range(40) as usize;
        let num_columns = 1 + rng.next_range(12) as usize;
        let num_buckets = 1 + rng.next_range(10) as usize;

        let input = random_matrix(&mut rng, num_rows, num_columns);
        let (buckets, signs) = random_assignment(&mut rng, num_rows, num_buckets);

        let output = sketch(&input, &buckets, &signs, num_buckets).unwrap();
        let expected = naive_sketch(&input, &buckets, &signs, num_buckets);
        // Same accumulation order, so the results are bit-for-bit equal.
        assert_eq!(output, expected);
    }
}

#[test]
fn projection_is_linear_in_the_input() {
    let mut rng = XorShift64::seeded(0xAB1E);
    let input = random_matrix(&mut rng, 30, 5);
    let (buckets, signs) = random_assignment(&mut rng, 30, 4);

    let scale = 2.5;
    let scaled_values = input.values().iter().map(|v| scale * v).collect();
    let scaled = DenseMatrix::from_row_major(30, 5, scaled_values).unwrap();

    let from_scaled = sketch(&scaled, &buckets, &signs, 4).unwrap();
    let base = sketch(&input, &buckets, &signs, 4).unwrap();
    let rescaled_values = base.values().iter().map(|v| scale * v).collect();
    let rescaled = DenseMatrix::from_row_major(4, 5, rescaled_values).unwrap();

    assert_matrices_close(&from_scaled, &rescaled, 1e-12);
}

#[test]
fn projection_is_additive_over_row_splits() {
    let mut rng = XorShift64::seeded(0xADD);
    let num_rows = 24;
    let num_columns = 6;
    let num_buckets = 5;
    let split = 10;

    let input = random_matrix(&mut rng, num_rows, num_columns);
    let (buckets, signs) = random_assignment(&mut rng, num_rows, num_buckets);

    let head_values = input.values()[..split * num_columns].to_vec();
    let tail_values = input.values()[split * num_columns..].to_vec();
    let head = DenseMatrix::from_row_major(split, num_columns, head_values).unwrap();
    let tail = DenseMatrix::from_row_major(num_rows - split, num_columns, tail_values).unwrap();

    let whole = sketch(&input, &buckets, &signs, num_buckets).unwrap();
    let from_head = sketch(&head, &buckets[..split], &signs[..split], num_buckets).unwrap();
    let from_tail = sketch(&tail, &buckets[split..], &signs[split..], num_buckets).unwrap();

    let summed_values = from_head
        .values()
        .iter()
        .zip(from_tail.values())
        .map(|(a, b)| a + b)
        .collect();
    let summed = DenseMatrix::from_row_major(num_buckets, num_columns, summed_values).unwrap();

    assert_matrices_close(&whole, &summed, 1e-12);
}

#[test]
fn perturbing_a_row_touches_only_its_bucket() {
    let mut rng = XorShift64::seeded(0x150);
    let num_rows = 16;
    let num_columns = 4;
    let num_buckets = 6;

    let input = random_matrix(&mut rng, num_rows, num_columns);
    let (buckets, signs) = random_assignment(&mut rng, num_rows, num_buckets);
    let assignment = CountSketch::new(num_buckets, &buckets, &signs).unwrap();

    let base = assignment.project(&input).unwrap();

    let perturbed_row = 7;
    let mut perturbed_values = input.values().to_vec();
    perturbed_values[perturbed_row * num_columns] += 100.0;
    let perturbed =
        DenseMatrix::from_row_major(num_rows, num_columns, perturbed_values).unwrap();
    let output = assignment.project(&perturbed).unwrap();

    let touched = assignment.bucket(perturbed_row);
    for bucket in 0..num_buckets {
        if bucket == touched {
            assert!(output.row(bucket) != base.row(bucket));
        } else {
            assert_eq!(output.row(bucket), base.row(bucket));
        }
    }
}

#[test]
fn repeated_projection_is_bit_reproducible() {
    let mut rng = XorShift64::seeded(0xB17);
    let input = random_matrix(&mut rng, 40, 8);
    let (buckets, signs) = random_assignment(&mut rng, 40, 3);
    let assignment = CountSketch::new(3, &buckets, &signs).unwrap();

    let first = assignment.project(&input).unwrap();
    for _ in 0..5 {
        assert_eq!(assignment.project(&input).unwrap(), first);
    }
}

#[test]
fn input_is_not_mutated() {
    let mut rng = XorShift64::seeded(0x11);
    let input = random_matrix(&mut rng, 12, 3);
    let snapshot = input.clone();
    let (buckets, signs) = random_assignment(&mut rng, 12, 4);

    let _ = sketch(&input, &buckets, &signs, 4).unwrap();
    assert_eq!(input, snapshot);
}
