use std::sync::LazyLock;

use super::{rows, LmsRow};

pub(crate) static BOYS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (0.0, 1.0, 34.4618, 0.03686),
        (1.0, 1.0, 37.2759, 0.03133),
        (2.0, 1.0, 39.1285, 0.02997),
        (3.0, 1.0, 40.5135, 0.02918),
        (4.0, 1.0, 41.6317, 0.02868),
        (5.0, 1.0, 42.5576, 0.02837),
        (6.0, 1.0, 43.3306, 0.02817),
        (7.0, 1.0, 43.9803, 0.02804),
        (8.0, 1.0, 44.5300, 0.02796),
        (9.0, 1.0, 44.9998, 0.02792),
        (10.0, 1.0, 45.4051, 0.02790),
        (11.0, 1.0, 45.7573, 0.02789),
        (12.0, 1.0, 46.0661, 0.02789),
        (13.0, 1.0, 46.3395, 0.02789),
        (14.0, 1.0, 46.5844, 0.02791),
        (15.0, 1.0, 46.8060, 0.02792),
        (16.0, 1.0, 47.0088, 0.02795),
        (17.0, 1.0, 47.1962, 0.02797),
        (18.0, 1.0, 47.3711, 0.02800),
        (19.0, 1.0, 47.5357, 0.02803),
        (20.0, 1.0, 47.6919, 0.02806),
        (21.0, 1.0, 47.8408, 0.02810),
        (22.0, 1.0, 47.9833, 0.02813),
        (23.0, 1.0, 48.1201, 0.02817),
        (24.0, 1.0, 48.2515, 0.02821),
    ])
});

pub(crate) static GIRLS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (0.0, 1.0, 33.8787, 0.03496),
        (1.0, 1.0, 36.5463, 0.03210),
        (2.0, 1.0, 38.2521, 0.03168),
        (3.0, 1.0, 39.5328, 0.03140),
        (4.0, 1.0, 40.5817, 0.03119),
        (5.0, 1.0, 41.4590, 0.03102),
        (6.0, 1.0, 42.1995, 0.03087),
        (7.0, 1.0, 42.8290, 0.03075),
        (8.0, 1.0, 43.3671, 0.03063),
        (9.0, 1.0, 43.8300, 0.03053),
        (10.0, 1.0, 44.2319, 0.03044),
        (11.0, 1.0, 44.5844, 0.03035),
        (12.0, 1.0, 44.8965, 0.03027),
        (13.0, 1.0, 45.1752, 0.03019),
        (14.0, 1.0, 45.4265, 0.03012),
        (15.0, 1.0, 45.6551, 0.03006),
        (16.0, 1.0, 45.8650, 0.02999),
        (17.0, 1.0, 46.0598, 0.02993),
        (18.0, 1.0, 46.2424, 0.02987),
        (19.0, 1.0, 46.4152, 0.02982),
        (20.0, 1.0, 46.5801, 0.02977),
        (21.0, 1.0, 46.7384, 0.02972),
        (22.0, 1.0, 46.8913, 0.02967),
        (23.0, 1.0, 47.0391, 0.02962),
        (24.0, 1.0, 47.1822, 0.02957),
    ])
});
