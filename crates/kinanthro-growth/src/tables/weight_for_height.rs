//! Weight-for-height, 65 to 120 cm standing height.

use std::sync::LazyLock;

use super::{rows, LmsRow};

const BOYS_L: f64 = -0.3521;
const GIRLS_L: f64 = -0.3833;

pub(crate) static BOYS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (65.0, BOYS_L, 7.4327, 0.08217),
        (65.5, BOYS_L, 7.5504, 0.08214),
        (66.0, BOYS_L, 7.6673, 0.08212),
        (66.5, BOYS_L, 7.7834, 0.08212),
        (67.0, BOYS_L, 7.8986, 0.08213),
        (67.5, BOYS_L, 8.0132, 0.08214),
        (68.0, BOYS_L, 8.1272, 0.08217),
        (68.5, BOYS_L, 8.2410, 0.08221),
        (69.0, BOYS_L, 8.3547, 0.08226),
        (69.5, BOYS_L, 8.4680, 0.08231),
        (70.0, BOYS_L, 8.5808, 0.08237),
        (70.5, BOYS_L, 8.6927, 0.08243),
        (71.0, BOYS_L, 8.8036, 0.08250),
        (71.5, BOYS_L, 8.9135, 0.08257),
        (72.0, BOYS_L, 9.0221, 0.08264),
        (72.5, BOYS_L, 9.1292, 0.08272),
        (73.0, BOYS_L, 9.2347, 0.08278),
        (73.5, BOYS_L, 9.3390, 0.08285),
        (74.0, BOYS_L, 9.4420, 0.08292),
        (74.5, BOYS_L, 9.5438, 0.08298),
        (75.0, BOYS_L, 9.6440, 0.08303),
        (75.5, BOYS_L, 9.7425, 0.08308),
        (76.0, BOYS_L, 9.8392, 0.08312),
        (76.5, BOYS_L, 9.9341, 0.08315),
        (77.0, BOYS_L, 10.0274, 0.08317),
        (77.5, BOYS_L, 10.1194, 0.08318),
        (78.0, BOYS_L, 10.2105, 0.08317),
        (78.5, BOYS_L, 10.3012, 0.08315),
        (79.0, BOYS_L, 10.3923, 0.08311),
        (79.5, BOYS_L, 10.4845, 0.08305),
        (80.0, BOYS_L, 10.5781, 0.08298),
        (80.5, BOYS_L, 10.6737, 0.08290),
        (81.0, BOYS_L, 10.7718, 0.08279),
        (81.5, BOYS_L, 10.8728, 0.08268),
        (82.0, BOYS_L, 10.9772, 0.08255),
        (82.5, BOYS_L, 11.0851, 0.08241),
        (83.0, BOYS_L, 11.1966, 0.08225),
        (83.5, BOYS_L, 11.3114, 0.08209),
        (84.0, BOYS_L, 11.4290, 0.08191),
        (84.5, BOYS_L, 11.5490, 0.08174),
        (85.0, BOYS_L, 11.6707, 0.08156),
        (85.5, BOYS_L, 11.7937, 0.08138),
        (86.0, BOYS_L, 11.9173, 0.08121),
        (86.5, BOYS_L, 12.0411, 0.08105),
        (87.0, BOYS_L, 12.1645, 0.08090),
        (87.5, BOYS_L, 12.2871, 0.08076),
        (88.0, BOYS_L, 12.4089, 0.08064),
        (88.5, BOYS_L, 12.5298, 0.08054),
        (89.0, BOYS_L, 12.6495, 0.08045),
        (89.5, BOYS_L, 12.7683, 0.08038),
        (90.0, BOYS_L, 12.8864, 0.08032),
        (90.5, BOYS_L, 13.0038, 0.08028),
        (91.0, BOYS_L, 13.1209, 0.08025),
        (91.5, BOYS_L, 13.2376, 0.08024),
        (92.0, BOYS_L, 13.3541, 0.08025),
        (92.5, BOYS_L, 13.4705, 0.08027),
        (93.0, BOYS_L, 13.5870, 0.08031),
        (93.5, BOYS_L, 13.7041, 0.08036),
        (94.0, BOYS_L, 13.8217, 0.08043),
        (94.5, BOYS_L, 13.9403, 0.08051),
        (95.0, BOYS_L, 14.0600, 0.08060),
        (95.5, BOYS_L, 14.1811, 0.08071),
        (96.0, BOYS_L, 14.3037, 0.08083),
        (96.5, BOYS_L, 14.4282, 0.08097),
        (97.0, BOYS_L, 14.5547, 0.08112),
        (97.5, BOYS_L, 14.6832, 0.08129),
        (98.0, BOYS_L, 14.8140, 0.08146),
        (98.5, BOYS_L, 14.9468, 0.08165),
        (99.0, BOYS_L, 15.0818, 0.08185),
        (99.5, BOYS_L, 15.2187, 0.08206),
        (100.0, BOYS_L, 15.3576, 0.08229),
        (100.5, BOYS_L, 15.4985, 0.08252),
        (101.0, BOYS_L, 15.6412, 0.08277),
        (101.5, BOYS_L, 15.7857, 0.08302),
        (102.0, BOYS_L, 15.9320, 0.08328),
        (102.5, BOYS_L, 16.0801, 0.08354),
        (103.0, BOYS_L, 16.2298, 0.08381),
        (103.5, BOYS_L, 16.3812, 0.08408),
        (104.0, BOYS_L, 16.5342, 0.08436),
        (104.5, BOYS_L, 16.6889, 0.08464),
        (105.0, BOYS_L, 16.8454, 0.08493),
        (105.5, BOYS_L, 17.0036, 0.08521),
        (106.0, BOYS_L, 17.1637, 0.08551),
        (106.5, BOYS_L, 17.3256, 0.08580),
        (107.0, BOYS_L, 17.4894, 0.08611),
        (107.5, BOYS_L, 17.6550, 0.08641),
        (108.0, BOYS_L, 17.8226, 0.08673),
        (108.5, BOYS_L, 17.9924, 0.08704),
        (109.0, BOYS_L, 18.1645, 0.08736),
        (109.5, BOYS_L, 18.3390, 0.08768),
        (110.0, BOYS_L, 18.5158, 0.08800),
        (110.5, BOYS_L, 18.6948, 0.08832),
        (111.0, BOYS_L, 18.8759, 0.08864),
        (111.5, BOYS_L, 19.0590, 0.08896),
        (112.0, BOYS_L, 19.2439, 0.08928),
        (112.5, BOYS_L, 19.4304, 0.08960),
        (113.0, BOYS_L, 19.6185, 0.08991),
        (113.5, BOYS_L, 19.8081, 0.09022),
        (114.0, BOYS_L, 19.9990, 0.09054),
        (114.5, BOYS_L, 20.1912, 0.09085),
        (115.0, BOYS_L, 20.3846, 0.09116),
        (115.5, BOYS_L, 20.5789, 0.09147),
        (116.0, BOYS_L, 20.7741, 0.09177),
        (116.5, BOYS_L, 20.9700, 0.09208),
        (117.0, BOYS_L, 21.1666, 0.09239),
        (117.5, BOYS_L, 21.3636, 0.09270),
        (118.0, BOYS_L, 21.5611, 0.09300),
        (118.5, BOYS_L, 21.7588, 0.09331),
        (119.0, BOYS_L, 21.9568, 0.09362),
        (119.5, BOYS_L, 22.1549, 0.09392),
        (120.0, BOYS_L, 22.3530, 0.09423),
    ])
});

pub(crate) static GIRLS: LazyLock<Vec<LmsRow>> = LazyLock::new(|| {
    rows(&[
        (65.0, GIRLS_L, 7.2402, 0.09113),
        (65.5, GIRLS_L, 7.3523, 0.09109),
        (66.0, GIRLS_L, 7.4630, 0.09104),
        (66.5, GIRLS_L, 7.5724, 0.09099),
        (67.0, GIRLS_L, 7.6806, 0.09094),
        (67.5, GIRLS_L, 7.7874, 0.09088),
        (68.0, GIRLS_L, 7.8930, 0.09083),
        (68.5, GIRLS_L, 7.9976, 0.09077),
        (69.0, GIRLS_L, 8.1012, 0.09071),
        (69.5, GIRLS_L, 8.2039, 0.09065),
        (70.0, GIRLS_L, 8.3058, 0.09059),
        (70.5, GIRLS_L, 8.4071, 0.09053),
        (71.0, GIRLS_L, 8.5078, 0.09047),
        (71.5, GIRLS_L, 8.6082, 0.09041),
        (72.0, GIRLS_L, 8.7081, 0.09035),
        (72.5, GIRLS_L, 8.8070, 0.09030),
        (73.0, GIRLS_L, 8.9050, 0.09024),
        (73.5, GIRLS_L, 9.0015, 0.09018),
        (74.0, GIRLS_L, 9.0968, 0.09013),
        (74.5, GIRLS_L, 9.1908, 0.09007),
        (75.0, GIRLS_L, 9.2837, 0.09002),
        (75.5, GIRLS_L, 9.3758, 0.08996),
        (76.0, GIRLS_L, 9.4672, 0.08991),
        (76.5, GIRLS_L, 9.5585, 0.08986),
        (77.0, GIRLS_L, 9.6504, 0.08980),
        (77.5, GIRLS_L, 9.7431, 0.08975),
        (78.0, GIRLS_L, 9.8372, 0.08969),
        (78.5, GIRLS_L, 9.9333, 0.08964),
        (79.0, GIRLS_L, 10.0315, 0.08959),
        (79.5, GIRLS_L, 10.1320, 0.08954),
        (80.0, GIRLS_L, 10.2348, 0.08948),
        (80.5, GIRLS_L, 10.3404, 0.08943),
        (81.0, GIRLS_L, 10.4485, 0.08938),
        (81.5, GIRLS_L, 10.5591, 0.08933),
        (82.0, GIRLS_L, 10.6724, 0.08928),
        (82.5, GIRLS_L, 10.7879, 0.08923),
        (83.0, GIRLS_L, 10.9057, 0.08918),
        (83.5, GIRLS_L, 11.0254, 0.08913),
        (84.0, GIRLS_L, 11.1468, 0.08908),
        (84.5, GIRLS_L, 11.2697, 0.08903),
        (85.0, GIRLS_L, 11.3938, 0.08898),
        (85.5, GIRLS_L, 11.5186, 0.08893),
        (86.0, GIRLS_L, 11.6441, 0.08888),
        (86.5, GIRLS_L, 11.7699, 0.08883),
        (87.0, GIRLS_L, 11.8962, 0.08878),
        (87.5, GIRLS_L, 12.0220, 0.08873),
        (88.0, GIRLS_L, 12.1476, 0.08868),
        (88.5, GIRLS_L, 12.2732, 0.08863),
        (89.0, GIRLS_L, 12.3981, 0.08858),
        (89.5, GIRLS_L, 12.5229, 0.08853),
        (90.0, GIRLS_L, 12.6473, 0.08848),
        (90.5, GIRLS_L, 12.7715, 0.08843),
        (91.0, GIRLS_L, 12.8955, 0.08838),
        (91.5, GIRLS_L, 13.0195, 0.08833),
        (92.0, GIRLS_L, 13.1432, 0.08828),
        (92.5, GIRLS_L, 13.2671, 0.08823),
        (93.0, GIRLS_L, 13.3912, 0.08818),
        (93.5, GIRLS_L, 13.5157, 0.08813),
        (94.0, GIRLS_L, 13.6405, 0.08808),
        (94.5, GIRLS_L, 13.7660, 0.08803),
        (95.0, GIRLS_L, 13.8923, 0.08798),
        (95.5, GIRLS_L, 14.0194, 0.08793),
        (96.0, GIRLS_L, 14.1475, 0.08788),
        (96.5, GIRLS_L, 14.2768, 0.08783),
        (97.0, GIRLS_L, 14.4073, 0.08778),
        (97.5, GIRLS_L, 14.5392, 0.08773),
        (98.0, GIRLS_L, 14.6728, 0.08768),
        (98.5, GIRLS_L, 14.8081, 0.08763),
        (99.0, GIRLS_L, 14.9454, 0.08758),
        (99.5, GIRLS_L, 15.0850, 0.08753),
        (100.0, GIRLS_L, 15.2268, 0.08748),
        (100.5, GIRLS_L, 15.3709, 0.08743),
        (101.0, GIRLS_L, 15.5174, 0.08738),
        (101.5, GIRLS_L, 15.6664, 0.08733),
        (102.0, GIRLS_L, 15.8178, 0.08728),
        (102.5, GIRLS_L, 15.9718, 0.08723),
        (103.0, GIRLS_L, 16.1282, 0.08718),
        (103.5, GIRLS_L, 16.2871, 0.08713),
        (104.0, GIRLS_L, 16.4484, 0.08708),
        (104.5, GIRLS_L, 16.6123, 0.08703),
        (105.0, GIRLS_L, 16.7787, 0.08698),
        (105.5, GIRLS_L, 16.9479, 0.08693),
        (106.0, GIRLS_L, 17.1199, 0.08688),
        (106.5, GIRLS_L, 17.2947, 0.08683),
        (107.0, GIRLS_L, 17.4725, 0.08678),
        (107.5, GIRLS_L, 17.6533, 0.08673),
        (108.0, GIRLS_L, 17.8372, 0.08668),
        (108.5, GIRLS_L, 18.0240, 0.08663),
        (109.0, GIRLS_L, 18.2137, 0.08658),
        (109.5, GIRLS_L, 18.4059, 0.08653),
        (110.0, GIRLS_L, 18.6006, 0.08648),
        (110.5, GIRLS_L, 18.7975, 0.08643),
        (111.0, GIRLS_L, 18.9966, 0.08638),
        (111.5, GIRLS_L, 19.1977, 0.08633),
        (112.0, GIRLS_L, 19.4006, 0.08628),
        (112.5, GIRLS_L, 19.6051, 0.08623),
        (113.0, GIRLS_L, 19.8110, 0.08618),
        (113.5, GIRLS_L, 20.0183, 0.08613),
        (114.0, GIRLS_L, 20.2268, 0.08608),
        (114.5, GIRLS_L, 20.4363, 0.08603),
        (115.0, GIRLS_L, 20.6468, 0.08598),
        (115.5, GIRLS_L, 20.8580, 0.08593),
        (116.0, GIRLS_L, 21.0700, 0.08588),
        (116.5, GIRLS_L, 21.2826, 0.08583),
        (117.0, GIRLS_L, 21.4957, 0.08578),
        (117.5, GIRLS_L, 21.7094, 0.08573),
        (118.0, GIRLS_L, 21.9234, 0.08568),
        (118.5, GIRLS_L, 22.1378, 0.08563),
        (119.0, GIRLS_L, 22.3525, 0.08558),
        (119.5, GIRLS_L, 22.5673, 0.08553),
        (120.0, GIRLS_L, 22.7821, 0.08548),
    ])
});
