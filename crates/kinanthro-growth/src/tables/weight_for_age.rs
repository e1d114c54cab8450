use std::sync::LazyLock;

use super::{rows, LmsRow};

pub(crate) static BOYS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (0.0, 0.3487, 3.3464, 0.14602),
        (1.0, 0.2297, 4.4709, 0.13395),
        (2.0, 0.1970, 5.5675, 0.12385),
        (3.0, 0.1738, 6.3762, 0.11727),
        (4.0, 0.1553, 7.0023, 0.11316),
        (5.0, 0.1395, 7.5105, 0.11080),
        (6.0, 0.1257, 7.9340, 0.10958),
        (7.0, 0.1134, 8.2970, 0.10902),
        (8.0, 0.1021, 8.6151, 0.10882),
        (9.0, 0.0917, 8.9014, 0.10881),
        (10.0, 0.0820, 9.1649, 0.10891),
        (11.0, 0.0730, 9.4122, 0.10906),
        (12.0, 0.0644, 9.6479, 0.10925),
        (13.0, 0.0563, 9.8749, 0.10949),
        (14.0, 0.0487, 10.0953, 0.10976),
        (15.0, 0.0413, 10.3108, 0.11007),
        (16.0, 0.0343, 10.5228, 0.11041),
        (17.0, 0.0275, 10.7319, 0.11079),
        (18.0, 0.0211, 10.9385, 0.11119),
        (19.0, 0.0148, 11.1430, 0.11164),
        (20.0, 0.0087, 11.3462, 0.11211),
        (21.0, 0.0029, 11.5486, 0.11261),
        (22.0, -0.0028, 11.7504, 0.11314),
        (23.0, -0.0083, 11.9514, 0.11369),
        (24.0, -0.0137, 12.1515, 0.11426),
        (25.0, -0.0189, 12.3502, 0.11485),
        (26.0, -0.0240, 12.5466, 0.11544),
        (27.0, -0.0289, 12.7401, 0.11604),
        (28.0, -0.0337, 12.9303, 0.11664),
        (29.0, -0.0385, 13.1169, 0.11723),
        (30.0, -0.0431, 13.3000, 0.11781),
        (31.0, -0.0476, 13.4798, 0.11839),
        (32.0, -0.0520, 13.6567, 0.11896),
        (33.0, -0.0564, 13.8309, 0.11953),
        (34.0, -0.0606, 14.0031, 0.12008),
        (35.0, -0.0648, 14.1736, 0.12062),
        (36.0, -0.0689, 14.3429, 0.12116),
        (37.0, -0.0729, 14.5113, 0.12168),
        (38.0, -0.0769, 14.6791, 0.12220),
        (39.0, -0.0808, 14.8466, 0.12271),
        (40.0, -0.0846, 15.0140, 0.12322),
        (41.0, -0.0883, 15.1813, 0.12373),
        (42.0, -0.0920, 15.3486, 0.12425),
        (43.0, -0.0957, 15.5158, 0.12478),
        (44.0, -0.0993, 15.6828, 0.12531),
        (45.0, -0.1028, 15.8497, 0.12586),
        (46.0, -0.1063, 16.0163, 0.12643),
        (47.0, -0.1097, 16.1827, 0.12700),
        (48.0, -0.1131, 16.3489, 0.12759),
        (49.0, -0.1165, 16.5150, 0.12819),
        (50.0, -0.1198, 16.6811, 0.12880),
        (51.0, -0.1230, 16.8471, 0.12943),
        (52.0, -0.1262, 17.0132, 0.13005),
        (53.0, -0.1294, 17.1792, 0.13069),
        (54.0, -0.1325, 17.3452, 0.13133),
        (55.0, -0.1356, 17.5111, 0.13197),
        (56.0, -0.1387, 17.6768, 0.13261),
        (57.0, -0.1417, 17.8422, 0.13325),
        (58.0, -0.1447, 18.0073, 0.13389),
        (59.0, -0.1477, 18.1722, 0.13453),
        (60.0, -0.1506, 18.3366, 0.13517),
    ])
});

pub(crate) static GIRLS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (0.0, 0.3809, 3.2322, 0.14171),
        (1.0, 0.1714, 4.1873, 0.13724),
        (2.0, 0.0962, 5.1282, 0.13000),
        (3.0, 0.0402, 5.8458, 0.12619),
        (4.0, -0.0050, 6.4237, 0.12402),
        (5.0, -0.0430, 6.8985, 0.12274),
        (6.0, -0.0756, 7.2970, 0.12204),
        (7.0, -0.1039, 7.6422, 0.12178),
        (8.0, -0.1288, 7.9487, 0.12181),
        (9.0, -0.1507, 8.2254, 0.12199),
        (10.0, -0.1700, 8.4800, 0.12223),
        (11.0, -0.1872, 8.7192, 0.12247),
        (12.0, -0.2024, 8.9481, 0.12268),
        (13.0, -0.2158, 9.1699, 0.12283),
        (14.0, -0.2278, 9.3870, 0.12294),
        (15.0, -0.2384, 9.6008, 0.12299),
        (16.0, -0.2478, 9.8124, 0.12303),
        (17.0, -0.2562, 10.0226, 0.12306),
        (18.0, -0.2637, 10.2315, 0.12309),
        (19.0, -0.2703, 10.4393, 0.12315),
        (20.0, -0.2762, 10.6464, 0.12323),
        (21.0, -0.2815, 10.8534, 0.12335),
        (22.0, -0.2862, 11.0608, 0.12350),
        (23.0, -0.2903, 11.2688, 0.12369),
        (24.0, -0.2941, 11.4775, 0.12390),
        (25.0, -0.2975, 11.6864, 0.12414),
        (26.0, -0.3005, 11.8947, 0.12441),
        (27.0, -0.3032, 12.1015, 0.12472),
        (28.0, -0.3057, 12.3059, 0.12506),
        (29.0, -0.3080, 12.5073, 0.12545),
        (30.0, -0.3101, 12.7055, 0.12587),
        (31.0, -0.3120, 12.9006, 0.12633),
        (32.0, -0.3138, 13.0930, 0.12683),
        (33.0, -0.3155, 13.2837, 0.12737),
        (34.0, -0.3171, 13.4731, 0.12794),
        (35.0, -0.3186, 13.6618, 0.12855),
        (36.0, -0.3201, 13.8503, 0.12919),
        (37.0, -0.3216, 14.0385, 0.12988),
        (38.0, -0.3230, 14.2265, 0.13059),
        (39.0, -0.3243, 14.4140, 0.13135),
        (40.0, -0.3257, 14.6010, 0.13213),
        (41.0, -0.3270, 14.7873, 0.13293),
        (42.0, -0.3283, 14.9727, 0.13376),
        (43.0, -0.3296, 15.1573, 0.13460),
        (44.0, -0.3309, 15.3410, 0.13545),
        (45.0, -0.3322, 15.5240, 0.13630),
        (46.0, -0.3335, 15.7064, 0.13716),
        (47.0, -0.3348, 15.8882, 0.13800),
        (48.0, -0.3361, 16.0697, 0.13884),
        (49.0, -0.3374, 16.2511, 0.13968),
        (50.0, -0.3387, 16.4322, 0.14051),
        (51.0, -0.3400, 16.6133, 0.14132),
        (52.0, -0.3414, 16.7942, 0.14213),
        (53.0, -0.3427, 16.9748, 0.14293),
        (54.0, -0.3440, 17.1551, 0.14371),
        (55.0, -0.3453, 17.3347, 0.14448),
        (56.0, -0.3466, 17.5136, 0.14525),
        (57.0, -0.3479, 17.6916, 0.14600),
        (58.0, -0.3492, 17.8686, 0.14675),
        (59.0, -0.3505, 18.0445, 0.14748),
        (60.0, -0.3518, 18.2193, 0.14821),
    ])
});
