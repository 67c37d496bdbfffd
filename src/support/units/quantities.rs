use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P2, Z0},
};

/// Emission intensity, kg/J in SI (reported as gCO₂/MJ or gCH₄/MJ).
pub type EmissionIntensity = Quantity<ISQ<N2, Z0, P2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
