//! 3×3 box blur with double-buffered iteration.
//!
//! Each pass reads only the previous image and writes only the next one.
//! Interior pixels become the mean of their 3×3 neighbourhood; border
//! pixels, which lack a full neighbourhood, are copied forward unchanged so
//! every pass produces a fully defined image.
//!
//! [`PingPong`] owns both buffers and flips which one is current after
//! every pass. No pixel is ever read and written in the same pass.

use gauntlet_core::{Image, KernelError};
use rayon::prelude::*;

/// Which of the two [`PingPong`] buffers is meant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The buffer holding the initial image.
    Front,
    /// The scratch buffer written by the first pass.
    Back,
}

impl Role {
    /// The opposite role.
    pub fn other(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

fn check_shapes(input: &Image, output: &Image) -> Result<(), KernelError> {
    if !input.same_shape(output) {
        return Err(KernelError::ShapeMismatch {
            what: "blur output buffer",
            expected: input.as_slice().len(),
            actual: output.as_slice().len(),
        });
    }
    Ok(())
}

/// Write row `r` of the blurred image into `out_row`.
#[inline]
fn blur_row(src: &[f64], rows: usize, cols: usize, r: usize, out_row: &mut [f64]) {
    let base = r * cols;
    if r == 0 || r + 1 >= rows || cols < 3 {
        out_row.copy_from_slice(&src[base..base + cols]);
        return;
    }
    out_row[0] = src[base];
    out_row[cols - 1] = src[base + cols - 1];
    for c in 1..cols - 1 {
        let mut sum = 0.0;
        for dr in [r - 1, r, r + 1] {
            let row = dr * cols;
            for dc in [c - 1, c, c + 1] {
                sum += src[row + dc];
            }
        }
        out_row[c] = sum / 9.0;
    }
}

/// One blur pass from `input` into `output`.
///
/// Returns `Err(KernelError::ShapeMismatch)` if the images differ in shape.
pub fn box_blur(input: &Image, output: &mut Image) -> Result<(), KernelError> {
    check_shapes(input, output)?;
    let (rows, cols) = (input.rows(), input.cols());
    let src = input.as_slice();
    for (r, out_row) in output.as_mut_slice().chunks_mut(cols).enumerate() {
        blur_row(src, rows, cols, r, out_row);
    }
    Ok(())
}

/// Row-parallel [`box_blur`]; bit-identical output.
pub fn par_box_blur(input: &Image, output: &mut Image) -> Result<(), KernelError> {
    check_shapes(input, output)?;
    let (rows, cols) = (input.rows(), input.cols());
    let src = input.as_slice();
    output
        .as_mut_slice()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(r, out_row)| blur_row(src, rows, cols, r, out_row));
    Ok(())
}

/// Two image buffers with a flip after every pass.
#[derive(Clone, Debug)]
pub struct PingPong {
    front: Image,
    back: Image,
    current: Role,
}

impl PingPong {
    /// Wrap `initial` as the front buffer and allocate a matching back
    /// buffer.
    pub fn new(initial: Image) -> Result<Self, KernelError> {
        let back = Image::zeros(initial.rows(), initial.cols())?;
        Ok(Self {
            front: initial,
            back,
            current: Role::Front,
        })
    }

    /// Which buffer holds the latest image.
    pub fn current(&self) -> Role {
        self.current
    }

    /// Borrow the buffer for `role`.
    pub fn image(&self, role: Role) -> &Image {
        match role {
            Role::Front => &self.front,
            Role::Back => &self.back,
        }
    }

    /// Borrow the latest image.
    pub fn current_image(&self) -> &Image {
        self.image(self.current)
    }

    /// Blur the current buffer into the other one, then flip.
    ///
    /// Returns the role that is now current.
    pub fn step(&mut self, parallel: bool) -> Result<Role, KernelError> {
        let (src, dst) = match self.current {
            Role::Front => (&self.front, &mut self.back),
            Role::Back => (&self.back, &mut self.front),
        };
        if parallel {
            par_box_blur(src, dst)?;
        } else {
            box_blur(src, dst)?;
        }
        self.current = self.current.other();
        Ok(self.current)
    }

    /// Run `iterations` passes. Zero passes leave the initial image current.
    pub fn run(&mut self, iterations: usize, parallel: bool) -> Result<Role, KernelError> {
        for _ in 0..iterations {
            self.step(parallel)?;
        }
        Ok(self.current)
    }

    /// Take the latest image, dropping the other buffer.
    pub fn into_current(self) -> Image {
        match self.current {
            Role::Front => self.front,
            Role::Back => self.back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use gauntlet_core::f64_hash;
    use proptest::prelude::*;

    #[test]
    fn constant_image_is_fixed_point() {
        let img = datasets::constant_image(6, 7, 9.0).unwrap();
        let mut out = Image::zeros(6, 7).unwrap();
        box_blur(&img, &mut out).unwrap();
        assert!(out.as_slice().iter().all(|&v| v == 9.0));
    }

    #[test]
    fn single_bright_pixel_spreads() {
        let mut img = Image::zeros(5, 5).unwrap();
        img.as_mut_slice()[2 * 5 + 2] = 9.0;
        let mut out = Image::zeros(5, 5).unwrap();
        box_blur(&img, &mut out).unwrap();
        for r in 1..4 {
            for c in 1..4 {
                assert_eq!(out.get(r, c), 1.0);
            }
        }
        assert_eq!(out.get(0, 0), 0.0);
    }

    #[test]
    fn borders_copied_forward() {
        let img = datasets::sawtooth_image(8, 9).unwrap();
        let mut pp = PingPong::new(img.clone()).unwrap();
        pp.run(4, false).unwrap();
        let out = pp.current_image();
        for r in 0..8 {
            for c in 0..9 {
                if img.is_border(r, c) {
                    assert_eq!(out.get(r, c), img.get(r, c), "border ({r},{c})");
                }
            }
        }
    }

    #[test]
    fn tiny_images_only_copy() {
        let img = datasets::sawtooth_image(2, 5).unwrap();
        let mut out = Image::zeros(2, 5).unwrap();
        box_blur(&img, &mut out).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn shape_mismatch_rejected() {
        let img = Image::zeros(4, 4).unwrap();
        let mut out = Image::zeros(4, 5).unwrap();
        assert!(matches!(
            box_blur(&img, &mut out),
            Err(KernelError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn roles_alternate() {
        let mut pp = PingPong::new(datasets::sawtooth_image(4, 4).unwrap()).unwrap();
        assert_eq!(pp.current(), Role::Front);
        assert_eq!(pp.step(false).unwrap(), Role::Back);
        assert_eq!(pp.step(false).unwrap(), Role::Front);
        assert_eq!(pp.run(3, false).unwrap(), Role::Back);
        assert_eq!(pp.run(0, false).unwrap(), Role::Back);
    }

    #[test]
    fn second_pass_reads_first_output() {
        let img = datasets::sawtooth_image(10, 10).unwrap();
        let mut once = Image::zeros(10, 10).unwrap();
        let mut twice = Image::zeros(10, 10).unwrap();
        box_blur(&img, &mut once).unwrap();
        box_blur(&once, &mut twice).unwrap();

        let mut pp = PingPong::new(img).unwrap();
        pp.run(2, false).unwrap();
        assert_eq!(pp.into_current(), twice);
    }

    proptest! {
        #[test]
        fn parallel_is_bit_identical(rows in 1usize..40, cols in 1usize..40, passes in 0usize..4) {
            let img = datasets::sawtooth_image(rows, cols).unwrap();
            let mut seq = PingPong::new(img.clone()).unwrap();
            let mut par = PingPong::new(img).unwrap();
            seq.run(passes, false).unwrap();
            par.run(passes, true).unwrap();
            prop_assert_eq!(
                f64_hash(seq.current_image().as_slice()),
                f64_hash(par.current_image().as_slice())
            );
        }
    }
}
