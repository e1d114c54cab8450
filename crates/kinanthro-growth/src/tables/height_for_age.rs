//! Standing height, 24 to 60 months.

use std::sync::LazyLock;

use super::{rows, LmsRow};

pub(crate) static BOYS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (24.0, 1.0, 87.1161, 0.03507),
        (25.0, 1.0, 87.9720, 0.03542),
        (26.0, 1.0, 88.8065, 0.03576),
        (27.0, 1.0, 89.6197, 0.03610),
        (28.0, 1.0, 90.4120, 0.03642),
        (29.0, 1.0, 91.1828, 0.03674),
        (30.0, 1.0, 91.9327, 0.03704),
        (31.0, 1.0, 92.6631, 0.03733),
        (32.0, 1.0, 93.3753, 0.03761),
        (33.0, 1.0, 94.0711, 0.03787),
        (34.0, 1.0, 94.7532, 0.03812),
        (35.0, 1.0, 95.4236, 0.03836),
        (36.0, 1.0, 96.0835, 0.03858),
        (37.0, 1.0, 96.7337, 0.03879),
        (38.0, 1.0, 97.3749, 0.03900),
        (39.0, 1.0, 98.0073, 0.03919),
        (40.0, 1.0, 98.6310, 0.03937),
        (41.0, 1.0, 99.2459, 0.03954),
        (42.0, 1.0, 99.8515, 0.03971),
        (43.0, 1.0, 100.4485, 0.03986),
        (44.0, 1.0, 101.0374, 0.04002),
        (45.0, 1.0, 101.6186, 0.04016),
        (46.0, 1.0, 102.1933, 0.04031),
        (47.0, 1.0, 102.7625, 0.04045),
        (48.0, 1.0, 103.3273, 0.04059),
        (49.0, 1.0, 103.8886, 0.04073),
        (50.0, 1.0, 104.4473, 0.04086),
        (51.0, 1.0, 105.0041, 0.04100),
        (52.0, 1.0, 105.5596, 0.04113),
        (53.0, 1.0, 106.1138, 0.04126),
        (54.0, 1.0, 106.6668, 0.04139),
        (55.0, 1.0, 107.2188, 0.04152),
        (56.0, 1.0, 107.7697, 0.04165),
        (57.0, 1.0, 108.3198, 0.04177),
        (58.0, 1.0, 108.8689, 0.04190),
        (59.0, 1.0, 109.4170, 0.04202),
        (60.0, 1.0, 109.9638, 0.04214),
    ])
});

pub(crate) static GIRLS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (24.0, 1.0, 85.7153, 0.03764),
        (25.0, 1.0, 86.5904, 0.03786),
        (26.0, 1.0, 87.4462, 0.03808),
        (27.0, 1.0, 88.2830, 0.03830),
        (28.0, 1.0, 89.1004, 0.03851),
        (29.0, 1.0, 89.8991, 0.03872),
        (30.0, 1.0, 90.6797, 0.03893),
        (31.0, 1.0, 91.4430, 0.03913),
        (32.0, 1.0, 92.1906, 0.03933),
        (33.0, 1.0, 92.9239, 0.03952),
        (34.0, 1.0, 93.6444, 0.03971),
        (35.0, 1.0, 94.3533, 0.03989),
        (36.0, 1.0, 95.0515, 0.04006),
        (37.0, 1.0, 95.7399, 0.04024),
        (38.0, 1.0, 96.4187, 0.04041),
        (39.0, 1.0, 97.0885, 0.04057),
        (40.0, 1.0, 97.7493, 0.04073),
        (41.0, 1.0, 98.4015, 0.04089),
        (42.0, 1.0, 99.0448, 0.04105),
        (43.0, 1.0, 99.6795, 0.04120),
        (44.0, 1.0, 100.3058, 0.04135),
        (45.0, 1.0, 100.9238, 0.04150),
        (46.0, 1.0, 101.5337, 0.04164),
        (47.0, 1.0, 102.1360, 0.04179),
        (48.0, 1.0, 102.7312, 0.04193),
        (49.0, 1.0, 103.3197, 0.04206),
        (50.0, 1.0, 103.9021, 0.04220),
        (51.0, 1.0, 104.4786, 0.04233),
        (52.0, 1.0, 105.0494, 0.04246),
        (53.0, 1.0, 105.6148, 0.04259),
        (54.0, 1.0, 106.1748, 0.04272),
        (55.0, 1.0, 106.7295, 0.04285),
        (56.0, 1.0, 107.2788, 0.04298),
        (57.0, 1.0, 107.8227, 0.04310),
        (58.0, 1.0, 108.3613, 0.04322),
        (59.0, 1.0, 108.8948, 0.04334),
        (60.0, 1.0, 109.4233, 0.04347),
    ])
});
