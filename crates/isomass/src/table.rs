/// raw table of (symbol, mass number, atomic mass in amu) rows from the
/// AME2020 atomic mass evaluation
/// (<https://www-nds.iaea.org/amdc/>). stable isotopes for H through Xe,
/// plus the long-lived radioisotopes that show up in spectroscopic work
/// (³H, ¹⁴C, ⁴⁰K, ⁹⁹Tc, ...)
pub static ISOTOPES: &[(&str, u32, f64)] = &[
    ("H", 1, 1.00782503),
    ("H", 2, 2.01410178),
    ("H", 3, 3.01604928),
    ("He", 3, 3.01602932),
    ("He", 4, 4.00260325),
    ("Li", 6, 6.01512289),
    ("Li", 7, 7.01600344),
    ("Be", 9, 9.01218307),
    ("B", 10, 10.01293695),
    ("B", 11, 11.00930536),
    ("C", 12, 12.0),
    ("C", 13, 13.00335484),
    ("C", 14, 14.00324199),
    ("N", 14, 14.00307400),
    ("N", 15, 15.00010890),
    ("O", 16, 15.99491462),
    ("O", 17, 16.99913176),
    ("O", 18, 17.99915961),
    ("F", 19, 18.99840316),
    ("Ne", 20, 19.99244018),
    ("Ne", 21, 20.99384669),
    ("Ne", 22, 21.99138511),
    ("Na", 23, 22.98976928),
    ("Mg", 24, 23.98504170),
    ("Mg", 25, 24.98583698),
    ("Mg", 26, 25.98259297),
    ("Al", 27, 26.98153853),
    ("Si", 28, 27.97692653),
    ("Si", 29, 28.97649466),
    ("Si", 30, 29.97377014),
    ("P", 31, 30.97376200),
    ("S", 32, 31.97207117),
    ("S", 33, 32.97145891),
    ("S", 34, 33.96786701),
    ("S", 36, 35.96708071),
    ("Cl", 35, 34.96885268),
    ("Cl", 37, 36.96590260),
    ("Ar", 36, 35.96754511),
    ("Ar", 38, 37.96273211),
    ("Ar", 40, 39.96238312),
    ("K", 39, 38.96370649),
    ("K", 40, 39.96399817),
    ("K", 41, 40.96182526),
    ("Ca", 40, 39.96259086),
    ("Ca", 42, 41.95861783),
    ("Ca", 43, 42.95876644),
    ("Ca", 44, 43.95548156),
    ("Ca", 46, 45.95368900),
    ("Ca", 48, 47.95252276),
    ("Sc", 45, 44.95590828),
    ("Ti", 46, 45.95262772),
    ("Ti", 47, 46.95175879),
    ("Ti", 48, 47.94794198),
    ("Ti", 49, 48.94786568),
    ("Ti", 50, 49.94478689),
    ("V", 50, 49.94715601),
    ("V", 51, 50.94395704),
    ("Cr", 50, 49.94604183),
    ("Cr", 52, 51.94050623),
    ("Cr", 53, 52.94064815),
    ("Cr", 54, 53.93887916),
    ("Mn", 55, 54.93804391),
    ("Fe", 54, 53.93960899),
    ("Fe", 56, 55.93493633),
    ("Fe", 57, 56.93539284),
    ("Fe", 58, 57.93327443),
    ("Co", 59, 58.93319429),
    ("Ni", 58, 57.93534241),
    ("Ni", 60, 59.93078588),
    ("Ni", 61, 60.93105557),
    ("Ni", 62, 61.92834537),
    ("Ni", 64, 63.92796682),
    ("Cu", 63, 62.92959772),
    ("Cu", 65, 64.92778970),
    ("Zn", 64, 63.92914201),
    ("Zn", 66, 65.92603381),
    ("Zn", 67, 66.92712775),
    ("Zn", 68, 67.92484455),
    ("Zn", 70, 69.92531920),
    ("Ga", 69, 68.92557353),
    ("Ga", 71, 70.92470258),
    ("Ge", 70, 69.92424875),
    ("Ge", 72, 71.92207583),
    ("Ge", 73, 72.92345896),
    ("Ge", 74, 73.92117776),
    ("Ge", 76, 75.92140273),
    ("As", 75, 74.92159457),
    ("Se", 74, 73.92247593),
    ("Se", 76, 75.91921370),
    ("Se", 77, 76.91991415),
    ("Se", 78, 77.91730928),
    ("Se", 80, 79.91652182),
    ("Se", 82, 81.91669953),
    ("Br", 79, 78.91833760),
    ("Br", 81, 80.91628970),
    ("Kr", 78, 77.92036494),
    ("Kr", 80, 79.91637808),
    ("Kr", 82, 81.91348273),
    ("Kr", 83, 82.91412716),
    ("Kr", 84, 83.91149773),
    ("Kr", 86, 85.91061063),
    ("Rb", 85, 84.91178974),
    ("Rb", 87, 86.90918053),
    ("Sr", 84, 83.91341910),
    ("Sr", 86, 85.90926061),
    ("Sr", 87, 86.90887750),
    ("Sr", 88, 87.90561226),
    ("Y", 89, 88.90584030),
    ("Zr", 90, 89.90469770),
    ("Zr", 91, 90.90563960),
    ("Zr", 92, 91.90503470),
    ("Zr", 94, 93.90631080),
    ("Zr", 96, 95.90827140),
    ("Nb", 93, 92.90637300),
    ("Mo", 92, 91.90680797),
    ("Mo", 94, 93.90508490),
    ("Mo", 95, 94.90583877),
    ("Mo", 96, 95.90467612),
    ("Mo", 97, 96.90601812),
    ("Mo", 98, 97.90540482),
    ("Mo", 100, 99.90747180),
    ("Tc", 99, 98.90625082),
    ("Ru", 96, 95.90759025),
    ("Ru", 98, 97.90528690),
    ("Ru", 99, 98.90593410),
    ("Ru", 100, 99.90421430),
    ("Ru", 101, 100.90557690),
    ("Ru", 102, 101.90434410),
    ("Ru", 104, 103.90542750),
    ("Rh", 103, 102.90549800),
    ("Pd", 102, 101.90560220),
    ("Pd", 104, 103.90403050),
    ("Pd", 105, 104.90507960),
    ("Pd", 106, 105.90348040),
    ("Pd", 108, 107.90389160),
    ("Pd", 110, 109.90517220),
    ("Ag", 107, 106.90509160),
    ("Ag", 109, 108.90475530),
    ("Cd", 106, 105.90645990),
    ("Cd", 108, 107.90418340),
    ("Cd", 110, 109.90300660),
    ("Cd", 111, 110.90418287),
    ("Cd", 112, 111.90276287),
    ("Cd", 113, 112.90440813),
    ("Cd", 114, 113.90336509),
    ("Cd", 116, 115.90476315),
    ("In", 113, 112.90406184),
    ("In", 115, 114.90387878),
    ("Sn", 112, 111.90482387),
    ("Sn", 114, 113.90278270),
    ("Sn", 115, 114.90334470),
    ("Sn", 116, 115.90174280),
    ("Sn", 117, 116.90295398),
    ("Sn", 118, 117.90160657),
    ("Sn", 119, 118.90331117),
    ("Sn", 120, 119.90220163),
    ("Sn", 122, 121.90344380),
    ("Sn", 124, 123.90527660),
    ("Sb", 121, 120.90381200),
    ("Sb", 123, 122.90421320),
    ("Te", 120, 119.90405930),
    ("Te", 122, 121.90304350),
    ("Te", 123, 122.90426970),
    ("Te", 124, 123.90281710),
    ("Te", 125, 124.90443000),
    ("Te", 126, 125.90331090),
    ("Te", 128, 127.90446128),
    ("Te", 130, 129.90622275),
    ("I", 127, 126.90447190),
    ("Xe", 124, 123.90588500),
    ("Xe", 126, 125.90429830),
    ("Xe", 128, 127.90353100),
    ("Xe", 129, 128.90478086),
    ("Xe", 130, 129.90350935),
    ("Xe", 131, 130.90508406),
    ("Xe", 132, 131.90415509),
    ("Xe", 134, 133.90539466),
    ("Xe", 136, 135.90721448),
];
