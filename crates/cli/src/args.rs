//! Parsers for comma-separated numeric arguments (`x,y` and six-coefficient matrices).

use anyhow::{bail, Context, Result};
use planar::{Matrix2D, Vec2};

fn parse_floats(text: &str) -> Result<Vec<f32>> {
    text.split(',')
        .map(|s| {
            s.trim()
                .parse::<f32>()
                .with_context(|| format!("invalid number {:?} in {:?}", s.trim(), text))
        })
        .collect()
}

/// Parse `"x,y"`.
pub fn parse_vec2(text: &str) -> Result<Vec2> {
    let v = parse_floats(text)?;
    if v.len() != 2 {
        bail!("expected 2 comma-separated numbers, got {} in {:?}", v.len(), text);
    }
    Ok(Vec2::new(v[0], v[1]))
}

/// Parse `"m11,m12,m21,m22,m31,m32"`.
pub fn parse_matrix(text: &str) -> Result<Matrix2D> {
    let v = parse_floats(text)?;
    let coeffs: [f32; 6] = v.as_slice().try_into().map_err(|_| {
        anyhow::anyhow!("expected 6 comma-separated numbers, got {} in {:?}", v.len(), text)
    })?;
    Ok(Matrix2D::from_array(coeffs))
}
