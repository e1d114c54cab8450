use std::sync::LazyLock;

use super::{rows, LmsRow};

const BOYS_L: f64 = -0.3521;
const GIRLS_L: f64 = -0.3833;

pub(crate) static BOYS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (45.0, BOYS_L, 2.4410, 0.09182),
        (45.5, BOYS_L, 2.5244, 0.09153),
        (46.0, BOYS_L, 2.6077, 0.09124),
        (46.5, BOYS_L, 2.6913, 0.09094),
        (47.0, BOYS_L, 2.7755, 0.09065),
        (47.5, BOYS_L, 2.8609, 0.09036),
        (48.0, BOYS_L, 2.9480, 0.09007),
        (48.5, BOYS_L, 3.0377, 0.08977),
        (49.0, BOYS_L, 3.1308, 0.08948),
        (49.5, BOYS_L, 3.2276, 0.08919),
        (50.0, BOYS_L, 3.3278, 0.08890),
        (50.5, BOYS_L, 3.4311, 0.08861),
        (51.0, BOYS_L, 3.5376, 0.08831),
        (51.5, BOYS_L, 3.6477, 0.08801),
        (52.0, BOYS_L, 3.7620, 0.08771),
        (52.5, BOYS_L, 3.8814, 0.08741),
        (53.0, BOYS_L, 4.0060, 0.08711),
        (53.5, BOYS_L, 4.1354, 0.08681),
        (54.0, BOYS_L, 4.2693, 0.08651),
        (54.5, BOYS_L, 4.4066, 0.08621),
        (55.0, BOYS_L, 4.5467, 0.08592),
        (55.5, BOYS_L, 4.6892, 0.08563),
        (56.0, BOYS_L, 4.8338, 0.08535),
        (56.5, BOYS_L, 4.9796, 0.08507),
        (57.0, BOYS_L, 5.1259, 0.08481),
        (57.5, BOYS_L, 5.2721, 0.08455),
        (58.0, BOYS_L, 5.4180, 0.08430),
        (58.5, BOYS_L, 5.5632, 0.08406),
        (59.0, BOYS_L, 5.7074, 0.08383),
        (59.5, BOYS_L, 5.8501, 0.08362),
        (60.0, BOYS_L, 5.9907, 0.08342),
        (60.5, BOYS_L, 6.1284, 0.08323),
        (61.0, BOYS_L, 6.2632, 0.08305),
        (61.5, BOYS_L, 6.3954, 0.08289),
        (62.0, BOYS_L, 6.5251, 0.08273),
        (62.5, BOYS_L, 6.6527, 0.08259),
        (63.0, BOYS_L, 6.7786, 0.08245),
        (63.5, BOYS_L, 6.9028, 0.08233),
        (64.0, BOYS_L, 7.0255, 0.08222),
        (64.5, BOYS_L, 7.1467, 0.08212),
        (65.0, BOYS_L, 7.2666, 0.08203),
        (65.5, BOYS_L, 7.3854, 0.08195),
        (66.0, BOYS_L, 7.5034, 0.08188),
        (66.5, BOYS_L, 7.6206, 0.08181),
        (67.0, BOYS_L, 7.7370, 0.08176),
        (67.5, BOYS_L, 7.8526, 0.08171),
        (68.0, BOYS_L, 7.9674, 0.08167),
        (68.5, BOYS_L, 8.0816, 0.08164),
        (69.0, BOYS_L, 8.1955, 0.08161),
        (69.5, BOYS_L, 8.3092, 0.08159),
        (70.0, BOYS_L, 8.4227, 0.08157),
        (70.5, BOYS_L, 8.5358, 0.08156),
        (71.0, BOYS_L, 8.6480, 0.08155),
        (71.5, BOYS_L, 8.7594, 0.08154),
        (72.0, BOYS_L, 8.8697, 0.08154),
        (72.5, BOYS_L, 8.9788, 0.08154),
        (73.0, BOYS_L, 9.0865, 0.08154),
        (73.5, BOYS_L, 9.1927, 0.08154),
        (74.0, BOYS_L, 9.2974, 0.08154),
        (74.5, BOYS_L, 9.4010, 0.08154),
        (75.0, BOYS_L, 9.5032, 0.08154),
        (75.5, BOYS_L, 9.6041, 0.08154),
        (76.0, BOYS_L, 9.7033, 0.08154),
        (76.5, BOYS_L, 9.8007, 0.08154),
        (77.0, BOYS_L, 9.8963, 0.08154),
        (77.5, BOYS_L, 9.9902, 0.08155),
        (78.0, BOYS_L, 10.0827, 0.08155),
        (78.5, BOYS_L, 10.1741, 0.08156),
        (79.0, BOYS_L, 10.2649, 0.08157),
        (79.5, BOYS_L, 10.3558, 0.08158),
        (80.0, BOYS_L, 10.4475, 0.08160),
        (80.5, BOYS_L, 10.5405, 0.08162),
        (81.0, BOYS_L, 10.6352, 0.08164),
        (81.5, BOYS_L, 10.7322, 0.08167),
        (82.0, BOYS_L, 10.8321, 0.08170),
        (82.5, BOYS_L, 10.9350, 0.08174),
        (83.0, BOYS_L, 11.0415, 0.08178),
        (83.5, BOYS_L, 11.1516, 0.08183),
        (84.0, BOYS_L, 11.2651, 0.08188),
        (84.5, BOYS_L, 11.3817, 0.08193),
        (85.0, BOYS_L, 11.5007, 0.08199),
        (85.5, BOYS_L, 11.6218, 0.08205),
        (86.0, BOYS_L, 11.7444, 0.08212),
        (86.5, BOYS_L, 11.8678, 0.08218),
        (87.0, BOYS_L, 11.9916, 0.08226),
        (87.5, BOYS_L, 12.1152, 0.08233),
        (88.0, BOYS_L, 12.2382, 0.08241),
        (88.5, BOYS_L, 12.3603, 0.08249),
        (89.0, BOYS_L, 12.4815, 0.08258),
        (89.5, BOYS_L, 12.6017, 0.08267),
        (90.0, BOYS_L, 12.7209, 0.08276),
        (90.5, BOYS_L, 12.8392, 0.08286),
        (91.0, BOYS_L, 12.9569, 0.08297),
        (91.5, BOYS_L, 13.0742, 0.08308),
        (92.0, BOYS_L, 13.1910, 0.08319),
        (92.5, BOYS_L, 13.3075, 0.08331),
        (93.0, BOYS_L, 13.4239, 0.08343),
        (93.5, BOYS_L, 13.5404, 0.08356),
        (94.0, BOYS_L, 13.6572, 0.08370),
        (94.5, BOYS_L, 13.7746, 0.08384),
        (95.0, BOYS_L, 13.8928, 0.08398),
        (95.5, BOYS_L, 14.0120, 0.08413),
        (96.0, BOYS_L, 14.1325, 0.08429),
        (96.5, BOYS_L, 14.2544, 0.08445),
        (97.0, BOYS_L, 14.3782, 0.08461),
        (97.5, BOYS_L, 14.5038, 0.08478),
        (98.0, BOYS_L, 14.6316, 0.08496),
        (98.5, BOYS_L, 14.7614, 0.08514),
        (99.0, BOYS_L, 14.8934, 0.08532),
        (99.5, BOYS_L, 15.0275, 0.08551),
        (100.0, BOYS_L, 15.1637, 0.08571),
        (100.5, BOYS_L, 15.3018, 0.08591),
        (101.0, BOYS_L, 15.4419, 0.08612),
        (101.5, BOYS_L, 15.5838, 0.08633),
        (102.0, BOYS_L, 15.7276, 0.08655),
        (102.5, BOYS_L, 15.8732, 0.08677),
        (103.0, BOYS_L, 16.0206, 0.08700),
        (103.5, BOYS_L, 16.1697, 0.08723),
        (104.0, BOYS_L, 16.3204, 0.08746),
        (104.5, BOYS_L, 16.4728, 0.08770),
        (105.0, BOYS_L, 16.6268, 0.08794),
        (105.5, BOYS_L, 16.7826, 0.08818),
        (106.0, BOYS_L, 16.9401, 0.08842),
        (106.5, BOYS_L, 17.0995, 0.08867),
        (107.0, BOYS_L, 17.2607, 0.08892),
        (107.5, BOYS_L, 17.4237, 0.08917),
        (108.0, BOYS_L, 17.5885, 0.08942),
        (108.5, BOYS_L, 17.7553, 0.08967),
        (109.0, BOYS_L, 17.9242, 0.08993),
        (109.5, BOYS_L, 18.0954, 0.09018),
        (110.0, BOYS_L, 18.2689, 0.09044),
    ])
});

pub(crate) static GIRLS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (45.0, GIRLS_L, 2.4607, 0.09029),
        (45.5, GIRLS_L, 2.5457, 0.09033),
        (46.0, GIRLS_L, 2.6306, 0.09037),
        (46.5, GIRLS_L, 2.7155, 0.09040),
        (47.0, GIRLS_L, 2.8007, 0.09044),
        (47.5, GIRLS_L, 2.8867, 0.09048),
        (48.0, GIRLS_L, 2.9741, 0.09052),
        (48.5, GIRLS_L, 3.0636, 0.09056),
        (49.0, GIRLS_L, 3.1560, 0.09060),
        (49.5, GIRLS_L, 3.2520, 0.09064),
        (50.0, GIRLS_L, 3.3518, 0.09068),
        (50.5, GIRLS_L, 3.4557, 0.09072),
        (51.0, GIRLS_L, 3.5636, 0.09076),
        (51.5, GIRLS_L, 3.6754, 0.09080),
        (52.0, GIRLS_L, 3.7911, 0.09085),
        (52.5, GIRLS_L, 3.9105, 0.09089),
        (53.0, GIRLS_L, 4.0332, 0.09093),
        (53.5, GIRLS_L, 4.1591, 0.09098),
        (54.0, GIRLS_L, 4.2875, 0.09102),
        (54.5, GIRLS_L, 4.4179, 0.09106),
        (55.0, GIRLS_L, 4.5498, 0.09110),
        (55.5, GIRLS_L, 4.6827, 0.09114),
        (56.0, GIRLS_L, 4.8162, 0.09118),
        (56.5, GIRLS_L, 4.9500, 0.09121),
        (57.0, GIRLS_L, 5.0837, 0.09125),
        (57.5, GIRLS_L, 5.2173, 0.09128),
        (58.0, GIRLS_L, 5.3507, 0.09130),
        (58.5, GIRLS_L, 5.4834, 0.09132),
        (59.0, GIRLS_L, 5.6151, 0.09134),
        (59.5, GIRLS_L, 5.7454, 0.09135),
        (60.0, GIRLS_L, 5.8742, 0.09136),
        (60.5, GIRLS_L, 6.0014, 0.09137),
        (61.0, GIRLS_L, 6.1270, 0.09137),
        (61.5, GIRLS_L, 6.2511, 0.09136),
        (62.0, GIRLS_L, 6.3738, 0.09135),
        (62.5, GIRLS_L, 6.4948, 0.09133),
        (63.0, GIRLS_L, 6.6144, 0.09131),
        (63.5, GIRLS_L, 6.7328, 0.09129),
        (64.0, GIRLS_L, 6.8501, 0.09126),
        (64.5, GIRLS_L, 6.9662, 0.09123),
        (65.0, GIRLS_L, 7.0812, 0.09119),
        (65.5, GIRLS_L, 7.1950, 0.09115),
        (66.0, GIRLS_L, 7.3076, 0.09110),
        (66.5, GIRLS_L, 7.4189, 0.09106),
        (67.0, GIRLS_L, 7.5288, 0.09101),
        (67.5, GIRLS_L, 7.6375, 0.09096),
        (68.0, GIRLS_L, 7.7448, 0.09090),
        (68.5, GIRLS_L, 7.8509, 0.09085),
        (69.0, GIRLS_L, 7.9559, 0.09079),
        (69.5, GIRLS_L, 8.0599, 0.09074),
        (70.0, GIRLS_L, 8.1630, 0.09068),
        (70.5, GIRLS_L, 8.2651, 0.09063),
        (71.0, GIRLS_L, 8.3666, 0.09057),
        (71.5, GIRLS_L, 8.4676, 0.09052),
        (72.0, GIRLS_L, 8.5679, 0.09046),
        (72.5, GIRLS_L, 8.6674, 0.09041),
        (73.0, GIRLS_L, 8.7661, 0.09035),
        (73.5, GIRLS_L, 8.8638, 0.09030),
        (74.0, GIRLS_L, 8.9601, 0.09025),
        (74.5, GIRLS_L, 9.0552, 0.09020),
        (75.0, GIRLS_L, 9.1490, 0.09014),
        (75.5, GIRLS_L, 9.2418, 0.09009),
        (76.0, GIRLS_L, 9.3337, 0.09004),
        (76.5, GIRLS_L, 9.4252, 0.08999),
        (77.0, GIRLS_L, 9.5166, 0.08994),
        (77.5, GIRLS_L, 9.6086, 0.08988),
        (78.0, GIRLS_L, 9.7015, 0.08983),
        (78.5, GIRLS_L, 9.7957, 0.08978),
        (79.0, GIRLS_L, 9.8915, 0.08973),
        (79.5, GIRLS_L, 9.9892, 0.08968),
        (80.0, GIRLS_L, 10.0891, 0.08963),
        (80.5, GIRLS_L, 10.1916, 0.08958),
        (81.0, GIRLS_L, 10.2965, 0.08953),
        (81.5, GIRLS_L, 10.4041, 0.08948),
        (82.0, GIRLS_L, 10.5140, 0.08943),
        (82.5, GIRLS_L, 10.6263, 0.08938),
        (83.0, GIRLS_L, 10.7410, 0.08932),
        (83.5, GIRLS_L, 10.8578, 0.08927),
        (84.0, GIRLS_L, 10.9767, 0.08922),
        (84.5, GIRLS_L, 11.0974, 0.08917),
        (85.0, GIRLS_L, 11.2198, 0.08912),
        (85.5, GIRLS_L, 11.3435, 0.08906),
        (86.0, GIRLS_L, 11.4684, 0.08901),
        (86.5, GIRLS_L, 11.5940, 0.08896),
        (87.0, GIRLS_L, 11.7201, 0.08891),
        (87.5, GIRLS_L, 11.8461, 0.08886),
        (88.0, GIRLS_L, 11.9720, 0.08881),
        (88.5, GIRLS_L, 12.0976, 0.08876),
        (89.0, GIRLS_L, 12.2229, 0.08871),
        (89.5, GIRLS_L, 12.3477, 0.08866),
        (90.0, GIRLS_L, 12.4723, 0.08861),
        (90.5, GIRLS_L, 12.5965, 0.08856),
        (91.0, GIRLS_L, 12.7205, 0.08851),
        (91.5, GIRLS_L, 12.8443, 0.08846),
        (92.0, GIRLS_L, 12.9681, 0.08841),
        (92.5, GIRLS_L, 13.0920, 0.08836),
        (93.0, GIRLS_L, 13.2158, 0.08831),
        (93.5, GIRLS_L, 13.3399, 0.08826),
        (94.0, GIRLS_L, 13.4643, 0.08821),
        (94.5, GIRLS_L, 13.5892, 0.08816),
        (95.0, GIRLS_L, 13.7146, 0.08811),
        (95.5, GIRLS_L, 13.8408, 0.08806),
        (96.0, GIRLS_L, 13.9676, 0.08801),
        (96.5, GIRLS_L, 14.0953, 0.08796),
        (97.0, GIRLS_L, 14.2239, 0.08791),
        (97.5, GIRLS_L, 14.3537, 0.08786),
        (98.0, GIRLS_L, 14.4848, 0.08781),
        (98.5, GIRLS_L, 14.6174, 0.08776),
        (99.0, GIRLS_L, 14.7519, 0.08771),
        (99.5, GIRLS_L, 14.8882, 0.08766),
        (100.0, GIRLS_L, 15.0267, 0.08761),
        (100.5, GIRLS_L, 15.1676, 0.08756),
        (101.0, GIRLS_L, 15.3108, 0.08751),
        (101.5, GIRLS_L, 15.4564, 0.08746),
        (102.0, GIRLS_L, 15.6046, 0.08741),
        (102.5, GIRLS_L, 15.7553, 0.08736),
        (103.0, GIRLS_L, 15.9087, 0.08731),
        (103.5, GIRLS_L, 16.0645, 0.08726),
        (104.0, GIRLS_L, 16.2229, 0.08721),
        (104.5, GIRLS_L, 16.3837, 0.08716),
        (105.0, GIRLS_L, 16.5470, 0.08711),
        (105.5, GIRLS_L, 16.7129, 0.08706),
        (106.0, GIRLS_L, 16.8814, 0.08701),
        (106.5, GIRLS_L, 17.0527, 0.08696),
        (107.0, GIRLS_L, 17.2269, 0.08691),
        (107.5, GIRLS_L, 17.4039, 0.08686),
        (108.0, GIRLS_L, 17.5839, 0.08681),
        (108.5, GIRLS_L, 17.7668, 0.08676),
        (109.0, GIRLS_L, 17.9526, 0.08671),
        (109.5, GIRLS_L, 18.1412, 0.08666),
        (110.0, GIRLS_L, 18.3324, 0.08661),
    ])
});
