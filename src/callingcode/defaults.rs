// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::calling_code::CountryCallingCode;

/// Compiled-in catalog, one record per ISO territory.
///
/// Order matters: it is the iteration order of the default registry and
/// therefore decides ties while resolving (see `parser::resolve`).
pub(super) static BUILTIN_CODES: [CountryCallingCode; 241] = [
    CountryCallingCode::builtin(93, "AF", &[]), // Afghanistan
    CountryCallingCode::builtin(358, "AX", &[18]), // Aland Islands
    CountryCallingCode::builtin(355, "AL", &[]), // Albania
    CountryCallingCode::builtin(213, "DZ", &[]), // Algeria
    CountryCallingCode::builtin(1, "AS", &[684]), // American Samoa
    CountryCallingCode::builtin(376, "AD", &[]), // Andorra
    CountryCallingCode::builtin(244, "AO", &[]), // Angola
    CountryCallingCode::builtin(1, "AI", &[264]), // Anguilla
    CountryCallingCode::builtin(1, "AG", &[268]), // Antigua and Barbuda
    CountryCallingCode::builtin(54, "AR", &[]), // Argentina
    CountryCallingCode::builtin(374, "AM", &[]), // Armenia
    CountryCallingCode::builtin(297, "AW", &[]), // Aruba
    CountryCallingCode::builtin(61, "AU", &[]), // Australia
    CountryCallingCode::builtin(672, "AQ", &[1]), // Australia Antarctic Territories
    CountryCallingCode::builtin(43, "AT", &[]), // Austria
    CountryCallingCode::builtin(994, "AZ", &[]), // Azerbaijan
    CountryCallingCode::builtin(1, "BS", &[242]), // Bahamas
    CountryCallingCode::builtin(973, "BH", &[]), // Bahrain
    CountryCallingCode::builtin(880, "BD", &[]), // Bangladesh
    CountryCallingCode::builtin(1, "BB", &[246]), // Barbados
    CountryCallingCode::builtin(375, "BY", &[]), // Belarus
    CountryCallingCode::builtin(32, "BE", &[]), // Belgium
    CountryCallingCode::builtin(501, "BZ", &[]), // Belize
    CountryCallingCode::builtin(229, "BJ", &[]), // Benin
    CountryCallingCode::builtin(1, "BM", &[441]), // Bermuda
    CountryCallingCode::builtin(975, "BT", &[]), // Bhutan
    CountryCallingCode::builtin(591, "BO", &[]), // Bolivia
    CountryCallingCode::builtin(599, "BQ", &[7]), // Bonaire
    CountryCallingCode::builtin(387, "BA", &[]), // Bosnia and Herzegovina
    CountryCallingCode::builtin(267, "BW", &[]), // Botswana
    CountryCallingCode::builtin(55, "BR", &[]), // Brazil
    CountryCallingCode::builtin(246, "IO", &[]), // British Indian Ocean Territory
    CountryCallingCode::builtin(1, "VG", &[284]), // British Virgin Islands
    CountryCallingCode::builtin(673, "BN", &[]), // Brunei
    CountryCallingCode::builtin(359, "BG", &[]), // Bulgaria
    CountryCallingCode::builtin(226, "BF", &[]), // Burkina Faso
    CountryCallingCode::builtin(257, "BI", &[]), // Burundi
    CountryCallingCode::builtin(855, "KH", &[]), // Cambodia
    CountryCallingCode::builtin(237, "CM", &[]), // Cameroon
    CountryCallingCode::builtin(1, "CA", &[]), // Canada
    CountryCallingCode::builtin(238, "CV", &[]), // Cape Verde
    CountryCallingCode::builtin(1, "KY", &[345]), // Cayman Islands
    CountryCallingCode::builtin(236, "CF", &[]), // Central African Republic
    CountryCallingCode::builtin(235, "TD", &[]), // Chad
    CountryCallingCode::builtin(56, "CL", &[]), // Chile
    CountryCallingCode::builtin(86, "CN", &[]), // China
    CountryCallingCode::builtin(61, "CX", &[89164]), // Christmas Island
    CountryCallingCode::builtin(61, "CC", &[89162]), // Cocos Islands
    CountryCallingCode::builtin(57, "CO", &[]), // Colombia
    CountryCallingCode::builtin(269, "KM", &[]), // Comoros
    CountryCallingCode::builtin(242, "CG", &[]), // Congo
    CountryCallingCode::builtin(682, "CK", &[]), // Cook Islands
    CountryCallingCode::builtin(506, "CR", &[]), // Costa Rica
    CountryCallingCode::builtin(385, "HR", &[]), // Croatia
    CountryCallingCode::builtin(53, "CU", &[]), // Cuba
    CountryCallingCode::builtin(599, "CW", &[9]), // Curacao
    CountryCallingCode::builtin(357, "CY", &[]), // Cyprus
    CountryCallingCode::builtin(420, "CZ", &[]), // Czech Republic
    CountryCallingCode::builtin(243, "CD", &[]), // Democratic Republic of the Congo
    CountryCallingCode::builtin(45, "DK", &[]), // Denmark
    CountryCallingCode::builtin(253, "DJ", &[]), // Djibouti
    CountryCallingCode::builtin(1, "DM", &[767]), // Dominica
    CountryCallingCode::builtin(1, "DO", &[809, 829, 849]), // Dominican Republic
    CountryCallingCode::builtin(670, "TL", &[]), // East Timor
    CountryCallingCode::builtin(593, "EC", &[]), // Ecuador
    CountryCallingCode::builtin(20, "EG", &[]), // Egypt
    CountryCallingCode::builtin(503, "SV", &[]), // El Salvador
    CountryCallingCode::builtin(240, "GQ", &[]), // Equatorial Guinea
    CountryCallingCode::builtin(291, "ER", &[]), // Eritrea
    CountryCallingCode::builtin(372, "EE", &[]), // Estonia
    CountryCallingCode::builtin(251, "ET", &[]), // Ethiopia
    CountryCallingCode::builtin(500, "FK", &[]), // Falkland Islands
    CountryCallingCode::builtin(298, "FO", &[]), // Faroe Islands
    CountryCallingCode::builtin(679, "FJ", &[]), // Fiji
    CountryCallingCode::builtin(358, "FI", &[]), // Finland
    CountryCallingCode::builtin(33, "FR", &[]), // France
    CountryCallingCode::builtin(594, "GF", &[]), // French Guiana
    CountryCallingCode::builtin(689, "PF", &[]), // French Polynesia
    CountryCallingCode::builtin(241, "GA", &[]), // Gabon
    CountryCallingCode::builtin(220, "GM", &[]), // Gambia
    CountryCallingCode::builtin(995, "GE", &[]), // Georgia
    CountryCallingCode::builtin(49, "DE", &[]), // Germany
    CountryCallingCode::builtin(233, "GH", &[]), // Ghana
    CountryCallingCode::builtin(350, "GI", &[]), // Gibraltar
    CountryCallingCode::builtin(30, "GR", &[]), // Greece
    CountryCallingCode::builtin(299, "GL", &[]), // Greenland
    CountryCallingCode::builtin(1, "GD", &[473]), // Grenada
    CountryCallingCode::builtin(590, "GP", &[]), // Guadeloupe
    CountryCallingCode::builtin(1, "GU", &[671]), // Guam
    CountryCallingCode::builtin(502, "GT", &[]), // Guatemala
    CountryCallingCode::builtin(44, "GG", &[1481, 7781, 7839, 7911]), // Guernsey
    CountryCallingCode::builtin(224, "GN", &[]), // Guinea
    CountryCallingCode::builtin(245, "GW", &[]), // Guinea Bissau
    CountryCallingCode::builtin(592, "GY", &[]), // Guyana
    CountryCallingCode::builtin(509, "HT", &[]), // Haiti
    CountryCallingCode::builtin(504, "HN", &[]), // Honduras
    CountryCallingCode::builtin(852, "HK", &[]), // Hong Kong
    CountryCallingCode::builtin(36, "HU", &[]), // Hungary
    CountryCallingCode::builtin(354, "IS", &[]), // Iceland
    CountryCallingCode::builtin(91, "IN", &[]), // India
    CountryCallingCode::builtin(62, "ID", &[]), // Indonesia
    CountryCallingCode::builtin(98, "IR", &[]), // Iran
    CountryCallingCode::builtin(964, "IQ", &[]), // Iraq
    CountryCallingCode::builtin(353, "IE", &[]), // Ireland
    CountryCallingCode::builtin(44, "IM", &[1624, 7524, 7624, 7924]), // Isle of Man
    CountryCallingCode::builtin(972, "IL", &[]), // Israel
    CountryCallingCode::builtin(39, "IT", &[]), // Italy
    CountryCallingCode::builtin(225, "CI", &[]), // Ivory Coast
    CountryCallingCode::builtin(1, "JM", &[658, 876]), // Jamaica
    CountryCallingCode::builtin(47, "SJ", &[79]), // Svalbard and Jan Mayen
    CountryCallingCode::builtin(81, "JP", &[]), // Japan
    CountryCallingCode::builtin(44, "JE", &[1534]), // Jersey
    CountryCallingCode::builtin(962, "JO", &[]), // Jordan
    CountryCallingCode::builtin(7, "KZ", &[6, 7]), // Kazakhstan
    CountryCallingCode::builtin(254, "KE", &[]), // Kenya
    CountryCallingCode::builtin(686, "KI", &[]), // Kiribati
    CountryCallingCode::builtin(850, "KP", &[]), // Korea North
    CountryCallingCode::builtin(82, "KR", &[]), // Korea South
    CountryCallingCode::builtin(383, "XK", &[]), // Kosovo
    CountryCallingCode::builtin(965, "KW", &[]), // Kuwait
    CountryCallingCode::builtin(996, "KG", &[]), // Kyrgyzstan
    CountryCallingCode::builtin(856, "LA", &[]), // Laos
    CountryCallingCode::builtin(371, "LV", &[]), // Latvia
    CountryCallingCode::builtin(961, "LB", &[]), // Lebanon
    CountryCallingCode::builtin(266, "LS", &[]), // Lesotho
    CountryCallingCode::builtin(231, "LR", &[]), // Liberia
    CountryCallingCode::builtin(218, "LY", &[]), // Libya
    CountryCallingCode::builtin(423, "LI", &[]), // Liechtenstein
    CountryCallingCode::builtin(370, "LT", &[]), // Lithuania
    CountryCallingCode::builtin(352, "LU", &[]), // Luxembourg
    CountryCallingCode::builtin(853, "MO", &[]), // Macau
    CountryCallingCode::builtin(389, "MK", &[]), // Macedonia
    CountryCallingCode::builtin(261, "MG", &[]), // Madagascar
    CountryCallingCode::builtin(265, "MW", &[]), // Malawi
    CountryCallingCode::builtin(60, "MY", &[]), // Malaysia
    CountryCallingCode::builtin(960, "MV", &[]), // Maldives
    CountryCallingCode::builtin(223, "ML", &[]), // Mali
    CountryCallingCode::builtin(356, "MT", &[]), // Malta
    CountryCallingCode::builtin(692, "MH", &[]), // Marshall Islands
    CountryCallingCode::builtin(596, "MQ", &[]), // Martinique
    CountryCallingCode::builtin(222, "MR", &[]), // Mauritania
    CountryCallingCode::builtin(230, "MU", &[]), // Mauritius
    CountryCallingCode::builtin(262, "YT", &[269, 639]), // Mayotte
    CountryCallingCode::builtin(52, "MX", &[]), // Mexico
    CountryCallingCode::builtin(691, "FM", &[]), // Micronesia
    CountryCallingCode::builtin(373, "MD", &[]), // Moldova
    CountryCallingCode::builtin(377, "MC", &[]), // Monaco
    CountryCallingCode::builtin(976, "MN", &[]), // Mongolia
    CountryCallingCode::builtin(382, "ME", &[]), // Montenegro
    CountryCallingCode::builtin(1, "MS", &[664]), // Montserrat
    CountryCallingCode::builtin(212, "MA", &[]), // Morocco
    CountryCallingCode::builtin(258, "MZ", &[]), // Mozambique
    CountryCallingCode::builtin(95, "MM", &[]), // Myanmar
    CountryCallingCode::builtin(264, "NA", &[]), // Namibia
    CountryCallingCode::builtin(674, "NR", &[]), // Nauru
    CountryCallingCode::builtin(977, "NP", &[]), // Nepal
    CountryCallingCode::builtin(31, "NL", &[]), // Netherlands
    CountryCallingCode::builtin(687, "NC", &[]), // New Caledonia
    CountryCallingCode::builtin(64, "NZ", &[]), // New Zealand
    CountryCallingCode::builtin(505, "NI", &[]), // Nicaragua
    CountryCallingCode::builtin(227, "NE", &[]), // Niger
    CountryCallingCode::builtin(234, "NG", &[]), // Nigeria
    CountryCallingCode::builtin(683, "NU", &[]), // Niue
    CountryCallingCode::builtin(672, "NF", &[3]), // Norfolk Island
    CountryCallingCode::builtin(1, "MP", &[670]), // Northern Mariana Islands
    CountryCallingCode::builtin(47, "NO", &[]), // Norway
    CountryCallingCode::builtin(968, "OM", &[]), // Oman
    CountryCallingCode::builtin(92, "PK", &[]), // Pakistan
    CountryCallingCode::builtin(680, "PW", &[]), // Palau
    CountryCallingCode::builtin(970, "PS", &[]), // Palestine
    CountryCallingCode::builtin(507, "PA", &[]), // Panama
    CountryCallingCode::builtin(675, "PG", &[]), // Papua New Guinea
    CountryCallingCode::builtin(595, "PY", &[]), // Paraguay
    CountryCallingCode::builtin(51, "PE", &[]), // Peru
    CountryCallingCode::builtin(63, "PH", &[]), // Philippines
    CountryCallingCode::builtin(48, "PL", &[]), // Poland
    CountryCallingCode::builtin(351, "PT", &[]), // Portugal
    CountryCallingCode::builtin(1, "PR", &[787, 930]), // Puerto Rico
    CountryCallingCode::builtin(974, "QA", &[]), // Qatar
    CountryCallingCode::builtin(262, "RE", &[]), // Reunion
    CountryCallingCode::builtin(40, "RO", &[]), // Romania
    CountryCallingCode::builtin(7, "RU", &[]), // Russia
    CountryCallingCode::builtin(250, "RW", &[]), // Rwanda
    CountryCallingCode::builtin(290, "SH", &[]), // Saint Helena
    CountryCallingCode::builtin(1, "KN", &[869]), // Saint Kitts and Nevis
    CountryCallingCode::builtin(1, "LC", &[758]), // Saint Lucia
    CountryCallingCode::builtin(508, "PM", &[]), // Saint Pierre and Miquelon
    CountryCallingCode::builtin(1, "VC", &[784]), // Saint Vincent and the Grenadines
    CountryCallingCode::builtin(685, "WS", &[]), // Samoa
    CountryCallingCode::builtin(378, "SM", &[]), // San Marino
    CountryCallingCode::builtin(239, "ST", &[]), // Sao Tome and Principe
    CountryCallingCode::builtin(966, "SA", &[]), // Saudi Arabia
    CountryCallingCode::builtin(221, "SN", &[]), // Senegal
    CountryCallingCode::builtin(381, "RS", &[]), // Serbia
    CountryCallingCode::builtin(248, "SC", &[]), // Seychelles
    CountryCallingCode::builtin(232, "SL", &[]), // Sierra Leone
    CountryCallingCode::builtin(65, "SG", &[]), // Singapore
    CountryCallingCode::builtin(421, "SK", &[]), // Slovakia
    CountryCallingCode::builtin(386, "SI", &[]), // Slovenia
    CountryCallingCode::builtin(677, "SB", &[]), // Solomon Islands
    CountryCallingCode::builtin(252, "SO", &[]), // Somalia
    CountryCallingCode::builtin(27, "ZA", &[]), // South Africa
    CountryCallingCode::builtin(211, "SS", &[]), // South Sudan
    CountryCallingCode::builtin(34, "ES", &[]), // Spain
    CountryCallingCode::builtin(94, "LK", &[]), // Sri Lanka
    CountryCallingCode::builtin(249, "SD", &[]), // Sudan
    CountryCallingCode::builtin(597, "SR", &[]), // Suriname
    CountryCallingCode::builtin(268, "SZ", &[]), // Swaziland
    CountryCallingCode::builtin(46, "SE", &[]), // Sweden
    CountryCallingCode::builtin(41, "CH", &[]), // Switzerland
    CountryCallingCode::builtin(963, "SY", &[]), // Syria
    CountryCallingCode::builtin(886, "TW", &[]), // Taiwan
    CountryCallingCode::builtin(992, "TJ", &[]), // Tajikistan
    CountryCallingCode::builtin(255, "TZ", &[]), // Tanzania
    CountryCallingCode::builtin(66, "TH", &[]), // Thailand
    CountryCallingCode::builtin(228, "TG", &[]), // Togo
    CountryCallingCode::builtin(690, "TK", &[]), // Tokelau
    CountryCallingCode::builtin(676, "TO", &[]), // Tonga
    CountryCallingCode::builtin(1, "TT", &[868]), // Trinidad and Tobago
    CountryCallingCode::builtin(216, "TN", &[]), // Tunisia
    CountryCallingCode::builtin(90, "TR", &[]), // Turkey
    CountryCallingCode::builtin(993, "TM", &[]), // Turkmenistan
    CountryCallingCode::builtin(1, "TC", &[649]), // Turks and Caicos Islands
    CountryCallingCode::builtin(688, "TV", &[]), // Tuvalu
    CountryCallingCode::builtin(256, "UG", &[]), // Uganda
    CountryCallingCode::builtin(380, "UA", &[]), // Ukraine
    CountryCallingCode::builtin(971, "AE", &[]), // United Arab Emirates
    CountryCallingCode::builtin(44, "GB", &[]), // United Kingdom
    CountryCallingCode::builtin(1, "US", &[]), // United States
    CountryCallingCode::builtin(598, "UY", &[]), // Uruguay
    CountryCallingCode::builtin(998, "UZ", &[]), // Uzbekistan
    CountryCallingCode::builtin(678, "VU", &[]), // Vanuatu
    CountryCallingCode::builtin(379, "VA", &[]), // Vatican City
    CountryCallingCode::builtin(58, "VE", &[]), // Venezuela
    CountryCallingCode::builtin(84, "VN", &[]), // Vietnam
    CountryCallingCode::builtin(1, "VI", &[340]), // Virgin Islands
    CountryCallingCode::builtin(681, "WF", &[]), // Wallis and Futuna
    CountryCallingCode::builtin(212, "EH", &[]), // Western Sahara
    CountryCallingCode::builtin(967, "YE", &[]), // Yemen
    CountryCallingCode::builtin(260, "ZM", &[]), // Zambia
    CountryCallingCode::builtin(263, "ZW", &[]), // Zimbabwe
];
