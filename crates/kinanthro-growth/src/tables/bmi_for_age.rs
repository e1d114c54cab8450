//! Height-based BMI, 24 to 60 months.

use std::sync::LazyLock;

use super::{rows, LmsRow};

pub(crate) static BOYS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (24.0, -0.6187, 16.0189, 0.07785),
        (25.0, -0.5840, 15.9800, 0.07792),
        (26.0, -0.5497, 15.9414, 0.07800),
        (27.0, -0.5166, 15.9036, 0.07808),
        (28.0, -0.4850, 15.8667, 0.07818),
        (29.0, -0.4552, 15.8306, 0.07829),
        (30.0, -0.4274, 15.7953, 0.07841),
        (31.0, -0.4016, 15.7606, 0.07854),
        (32.0, -0.3782, 15.7267, 0.07867),
        (33.0, -0.3572, 15.6934, 0.07882),
        (34.0, -0.3388, 15.6610, 0.07897),
        (35.0, -0.3231, 15.6294, 0.07914),
        (36.0, -0.3101, 15.5988, 0.07931),
        (37.0, -0.3000, 15.5693, 0.07950),
        (38.0, -0.2927, 15.5410, 0.07969),
        (39.0, -0.2884, 15.5140, 0.07990),
        (40.0, -0.2869, 15.4885, 0.08012),
        (41.0, -0.2881, 15.4645, 0.08036),
        (42.0, -0.2919, 15.4420, 0.08061),
        (43.0, -0.2981, 15.4210, 0.08087),
        (44.0, -0.3067, 15.4013, 0.08115),
        (45.0, -0.3174, 15.3827, 0.08144),
        (46.0, -0.3300, 15.3652, 0.08174),
        (47.0, -0.3443, 15.3485, 0.08205),
        (48.0, -0.3601, 15.3326, 0.08238),
        (49.0, -0.3771, 15.3174, 0.08272),
        (50.0, -0.3950, 15.3029, 0.08307),
        (51.0, -0.4137, 15.2891, 0.08343),
        (52.0, -0.4330, 15.2759, 0.08380),
        (53.0, -0.4526, 15.2633, 0.08418),
        (54.0, -0.4723, 15.2514, 0.08457),
        (55.0, -0.4922, 15.2400, 0.08496),
        (56.0, -0.5120, 15.2291, 0.08536),
        (57.0, -0.5317, 15.2188, 0.08577),
        (58.0, -0.5511, 15.2091, 0.08617),
        (59.0, -0.5702, 15.2000, 0.08659),
        (60.0, -0.5889, 15.1916, 0.08700),
    ])
});

pub(crate) static GIRLS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (24.0, -0.5684, 15.6881, 0.08454),
        (25.0, -0.5684, 15.6590, 0.08452),
        (26.0, -0.5684, 15.6308, 0.08449),
        (27.0, -0.5684, 15.6037, 0.08446),
        (28.0, -0.5684, 15.5777, 0.08444),
        (29.0, -0.5684, 15.5523, 0.08443),
        (30.0, -0.5684, 15.5276, 0.08444),
        (31.0, -0.5684, 15.5034, 0.08448),
        (32.0, -0.5684, 15.4798, 0.08455),
        (33.0, -0.5684, 15.4572, 0.08467),
        (34.0, -0.5684, 15.4356, 0.08484),
        (35.0, -0.5684, 15.4155, 0.08506),
        (36.0, -0.5684, 15.3968, 0.08535),
        (37.0, -0.5684, 15.3796, 0.08569),
        (38.0, -0.5684, 15.3638, 0.08609),
        (39.0, -0.5684, 15.3493, 0.08654),
        (40.0, -0.5684, 15.3358, 0.08704),
        (41.0, -0.5684, 15.3233, 0.08757),
        (42.0, -0.5684, 15.3116, 0.08813),
        (43.0, -0.5684, 15.3007, 0.08872),
        (44.0, -0.5684, 15.2905, 0.08931),
        (45.0, -0.5684, 15.2814, 0.08991),
        (46.0, -0.5684, 15.2732, 0.09051),
        (47.0, -0.5684, 15.2661, 0.09110),
        (48.0, -0.5684, 15.2602, 0.09168),
        (49.0, -0.5684, 15.2556, 0.09227),
        (50.0, -0.5684, 15.2523, 0.09286),
        (51.0, -0.5684, 15.2503, 0.09345),
        (52.0, -0.5684, 15.2496, 0.09403),
        (53.0, -0.5684, 15.2502, 0.09460),
        (54.0, -0.5684, 15.2519, 0.09515),
        (55.0, -0.5684, 15.2544, 0.09568),
        (56.0, -0.5684, 15.2575, 0.09618),
        (57.0, -0.5684, 15.2612, 0.09665),
        (58.0, -0.5684, 15.2653, 0.09709),
        (59.0, -0.5684, 15.2698, 0.09750),
        (60.0, -0.5684, 15.2747, 0.09789),
    ])
});
