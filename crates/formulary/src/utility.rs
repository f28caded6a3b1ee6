use num_traits as nt;

/// Cobb-Douglas utility x^a * y^(1-a) with elasticity a.
/// Reference: https://en.wikipedia.org/wiki/Cobb%E2%80%93Douglas_production_function
///
/// Defined for x, y > 0. Other inputs follow IEEE powf semantics, e.g. a
/// negative base with a fractional exponent yields NaN.
pub fn utility<K>(x: K, y: K, a: K) -> K
where
    K: nt::Float,
{
    x.powf(a) * y.powf(K::one() - a)
}

/// Cobb-Douglas evaluator over two goods with a fixed elasticity
#[derive(Clone, Copy, Debug)]
pub struct CobbDouglas<K> {
    elasticity: K,
}

impl<K> CobbDouglas<K>
where
    K: nt::Float,
{
    pub fn from_elasticity(elasticity: K) -> Self {
        Self { elasticity }
    }

    pub fn elasticity(&self) -> K {
        self.elasticity
    }

    pub fn eval(&self, x: K, y: K) -> K {
        utility(x, y, self.elasticity)
    }
}
