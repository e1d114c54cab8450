//! Recumbent length, birth to 24 months.

use std::sync::LazyLock;

use super::{rows, LmsRow};

pub(crate) static BOYS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (0.0, 1.0, 49.8842, 0.03795),
        (1.0, 1.0, 54.7244, 0.03557),
        (2.0, 1.0, 58.4249, 0.03424),
        (3.0, 1.0, 61.4292, 0.03328),
        (4.0, 1.0, 63.8860, 0.03257),
        (5.0, 1.0, 65.9026, 0.03204),
        (6.0, 1.0, 67.6236, 0.03165),
        (7.0, 1.0, 69.1645, 0.03139),
        (8.0, 1.0, 70.5994, 0.03124),
        (9.0, 1.0, 71.9687, 0.03117),
        (10.0, 1.0, 73.2812, 0.03118),
        (11.0, 1.0, 74.5388, 0.03125),
        (12.0, 1.0, 75.7488, 0.03137),
        (13.0, 1.0, 76.9186, 0.03154),
        (14.0, 1.0, 78.0497, 0.03174),
        (15.0, 1.0, 79.1458, 0.03197),
        (16.0, 1.0, 80.2113, 0.03222),
        (17.0, 1.0, 81.2487, 0.03250),
        (18.0, 1.0, 82.2587, 0.03279),
        (19.0, 1.0, 83.2418, 0.03310),
        (20.0, 1.0, 84.1996, 0.03342),
        (21.0, 1.0, 85.1348, 0.03376),
        (22.0, 1.0, 86.0477, 0.03410),
        (23.0, 1.0, 86.9410, 0.03445),
        (24.0, 1.0, 87.8161, 0.03479),
    ])
});

pub(crate) static GIRLS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (0.0, 1.0, 49.1477, 0.03790),
        (1.0, 1.0, 53.6872, 0.03640),
        (2.0, 1.0, 57.0673, 0.03568),
        (3.0, 1.0, 59.8029, 0.03520),
        (4.0, 1.0, 62.0899, 0.03486),
        (5.0, 1.0, 64.0301, 0.03463),
        (6.0, 1.0, 65.7311, 0.03448),
        (7.0, 1.0, 67.2873, 0.03441),
        (8.0, 1.0, 68.7498, 0.03440),
        (9.0, 1.0, 70.1435, 0.03444),
        (10.0, 1.0, 71.4818, 0.03452),
        (11.0, 1.0, 72.7710, 0.03464),
        (12.0, 1.0, 74.0150, 0.03479),
        (13.0, 1.0, 75.2176, 0.03496),
        (14.0, 1.0, 76.3817, 0.03514),
        (15.0, 1.0, 77.5099, 0.03534),
        (16.0, 1.0, 78.6055, 0.03555),
        (17.0, 1.0, 79.6710, 0.03576),
        (18.0, 1.0, 80.7079, 0.03598),
        (19.0, 1.0, 81.7182, 0.03620),
        (20.0, 1.0, 82.7036, 0.03643),
        (21.0, 1.0, 83.6654, 0.03666),
        (22.0, 1.0, 84.6040, 0.03688),
        (23.0, 1.0, 85.5202, 0.03711),
        (24.0, 1.0, 86.4153, 0.03734),
    ])
});
