pub const TOL_F64: f64 = 1e-9;
