//! Array-shaped market inputs
//!
//! Surface and curve plots evaluate the formulas over grids. Each input can be
//! a scalar (0-d array) or an array of any rank; shapes combine with the usual
//! broadcasting rules: dimensions are aligned from the right and each axis
//! must either match or have length one.

use ndarray::{arr0, Array, ArrayD, ArrayViewD, Dimension, IxDyn, Zip};

use crate::core::{BsError, BsResult, MarketInputs};

/// Broadcastable arrays of market inputs
#[derive(Debug, Clone, PartialEq)]
pub struct MarketArrays {
    pub spot: ArrayD<f64>,
    pub strike: ArrayD<f64>,
    pub time: ArrayD<f64>,
    pub rate: ArrayD<f64>,
    pub vol: ArrayD<f64>,
}

impl MarketArrays {
    /// All five inputs as 0-d arrays
    pub fn from_scalar(inputs: &MarketInputs) -> Self {
        Self {
            spot: arr0(inputs.spot).into_dyn(),
            strike: arr0(inputs.strike).into_dyn(),
            time: arr0(inputs.time).into_dyn(),
            rate: arr0(inputs.rate).into_dyn(),
            vol: arr0(inputs.vol).into_dyn(),
        }
    }

    pub fn with_spot<D: Dimension>(mut self, spot: Array<f64, D>) -> Self {
        self.spot = spot.into_dyn();
        self
    }

    pub fn with_strike<D: Dimension>(mut self, strike: Array<f64, D>) -> Self {
        self.strike = strike.into_dyn();
        self
    }

    pub fn with_time<D: Dimension>(mut self, time: Array<f64, D>) -> Self {
        self.time = time.into_dyn();
        self
    }

    pub fn with_rate<D: Dimension>(mut self, rate: Array<f64, D>) -> Self {
        self.rate = rate.into_dyn();
        self
    }

    pub fn with_vol<D: Dimension>(mut self, vol: Array<f64, D>) -> Self {
        self.vol = vol.into_dyn();
        self
    }

    /// Common shape of the five inputs
    pub fn shape(&self) -> BsResult<Vec<usize>> {
        broadcast_shape(&[
            self.spot.shape(),
            self.strike.shape(),
            self.time.shape(),
            self.rate.shape(),
            self.vol.shape(),
        ])
    }

    /// One `MarketInputs` per element of the broadcast shape
    pub fn inputs(&self) -> BsResult<ArrayD<MarketInputs>> {
        let shape = self.shape()?;
        let spot = broadcast_to("spot", &self.spot, &shape)?;
        let strike = broadcast_to("strike", &self.strike, &shape)?;
        let time = broadcast_to("time", &self.time, &shape)?;
        let rate = broadcast_to("rate", &self.rate, &shape)?;
        let vol = broadcast_to("vol", &self.vol, &shape)?;

        Ok(Zip::from(&spot)
            .and(&strike)
            .and(&time)
            .and(&rate)
            .and(&vol)
            .map_collect(|&s, &k, &t, &r, &v| MarketInputs::new(s, k, t, r, v)))
    }
}

impl From<MarketInputs> for MarketArrays {
    fn from(inputs: MarketInputs) -> Self {
        Self::from_scalar(&inputs)
    }
}

fn broadcast_to<'a>(
    name: &str,
    array: &'a ArrayD<f64>,
    shape: &[usize],
) -> BsResult<ArrayViewD<'a, f64>> {
    array.broadcast(IxDyn(shape)).ok_or_else(|| {
        BsError::shape_mismatch(format!(
            "{name} {:?} cannot broadcast to {:?}",
            array.shape(),
            shape
        ))
    })
}

/// Combine shapes right-aligned; every axis must agree or be 1
pub fn broadcast_shape(shapes: &[&[usize]]) -> BsResult<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (i, &len) in shape.iter().enumerate() {
            let target = &mut out[offset + i];
            if *target == 1 {
                *target = len;
            } else if len != 1 && len != *target {
                return Err(BsError::shape_mismatch(format!(
                    "axis {} has lengths {} and {}",
                    offset + i,
                    *target,
                    len
                )));
            }
        }
    }

    Ok(out)
}
