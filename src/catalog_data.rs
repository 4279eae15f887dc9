//! Embedded ISO-3166 reference table.
//!
//! Current states are listed in ISO2 order. Aliases cover English variants,
//! endonyms and constituent nations; regions are subdivisions that appear
//! often enough in genealogical place strings to be worth resolving.
//! Defunct states live in [`HISTORICAL`] and resolve to the present-day
//! country that holds most of their territory.

// ── Current states ───────────────────────────────────────────────────

pub struct CountryEntry {
    pub iso2: &'static str,
    pub iso3: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub regions: &'static [&'static str],
}

const fn country(
    iso2: &'static str,
    iso3: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    regions: &'static [&'static str],
) -> CountryEntry {
    CountryEntry {
        iso2,
        iso3,
        name,
        aliases,
        regions,
    }
}

const US_STATES: &[&str] = &[
    // Georgia is left out: the name belongs to the country GE.
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
    "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas",
    "Utah", "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
    "District of Columbia",
];

const GB_REGIONS: &[&str] = &[
    "Yorkshire", "Lancashire", "Kent", "Devon", "Cornwall", "Essex", "Sussex", "Surrey",
    "Middlesex", "Norfolk", "Suffolk", "Somerset", "Cheshire", "Lincolnshire", "Northumberland",
    "Durham", "Staffordshire", "Derbyshire", "Nottinghamshire", "Gloucestershire", "Wiltshire",
    "Dorset", "Hampshire", "Shropshire", "Cumberland", "Westmorland", "Glamorgan",
    "Pembrokeshire", "Aberdeenshire", "Lanarkshire", "Fife", "Argyll", "Perthshire",
    "Midlothian", "Ayrshire", "County Antrim", "County Down", "County Tyrone",
];

const DE_REGIONS: &[&str] = &[
    "Bavaria", "Bayern", "Baden-Württemberg", "Baden", "Württemberg", "Saxony", "Sachsen",
    "Lower Saxony", "Niedersachsen", "Hesse", "Hessen", "North Rhine-Westphalia",
    "Nordrhein-Westfalen", "Westphalia", "Westfalen", "Rhineland-Palatinate",
    "Rheinland-Pfalz", "Rhineland", "Thuringia", "Thüringen", "Brandenburg", "Mecklenburg",
    "Mecklenburg-Vorpommern", "Schleswig-Holstein", "Saarland", "Saxony-Anhalt",
    "Sachsen-Anhalt", "Hamburg", "Bremen", "Berlin",
];

#[rustfmt::skip]
pub static COUNTRIES: &[CountryEntry] = &[
    country("AD", "AND", "Andorra", &[], &[]),
    country("AE", "ARE", "United Arab Emirates", &["UAE", "Emirates"], &["Dubai", "Abu Dhabi"]),
    country("AF", "AFG", "Afghanistan", &[], &[]),
    country("AG", "ATG", "Antigua and Barbuda", &["Antigua"], &[]),
    country("AI", "AIA", "Anguilla", &[], &[]),
    country("AL", "ALB", "Albania", &["Shqipëria"], &[]),
    country("AM", "ARM", "Armenia", &["Hayastan"], &[]),
    country("AO", "AGO", "Angola", &[], &[]),
    country("AQ", "ATA", "Antarctica", &[], &[]),
    country("AR", "ARG", "Argentina", &["Argentine Republic"], &["Buenos Aires", "Mendoza", "Tucumán"]),
    country("AS", "ASM", "American Samoa", &[], &[]),
    country("AT", "AUT", "Austria", &["Österreich", "Republic of Austria"], &["Tyrol", "Tirol", "Styria", "Steiermark", "Carinthia", "Kärnten", "Salzburg", "Vorarlberg", "Upper Austria", "Lower Austria", "Burgenland"]),
    country("AU", "AUS", "Australia", &["Commonwealth of Australia"], &["New South Wales", "Queensland", "Victoria", "Tasmania", "Van Diemen's Land", "South Australia", "Western Australia", "Northern Territory", "Australian Capital Territory"]),
    country("AW", "ABW", "Aruba", &[], &[]),
    country("AX", "ALA", "Åland Islands", &["Aland"], &[]),
    country("AZ", "AZE", "Azerbaijan", &[], &[]),
    country("BA", "BIH", "Bosnia and Herzegovina", &["Bosnia", "Bosnia-Herzegovina"], &[]),
    country("BB", "BRB", "Barbados", &[], &[]),
    country("BD", "BGD", "Bangladesh", &[], &[]),
    country("BE", "BEL", "Belgium", &["Belgique", "België", "Belgien"], &["Flanders", "Vlaanderen", "Wallonia", "Wallonie", "Antwerp", "Antwerpen", "Hainaut", "Liège", "East Flanders", "West Flanders"]),
    country("BF", "BFA", "Burkina Faso", &[], &[]),
    country("BG", "BGR", "Bulgaria", &["Bulgariya"], &[]),
    country("BH", "BHR", "Bahrain", &[], &[]),
    country("BI", "BDI", "Burundi", &[], &[]),
    country("BJ", "BEN", "Benin", &[], &[]),
    country("BL", "BLM", "Saint Barthélemy", &["St. Barthelemy", "St Barts"], &[]),
    country("BM", "BMU", "Bermuda", &[], &[]),
    country("BN", "BRN", "Brunei", &["Brunei Darussalam"], &[]),
    country("BO", "BOL", "Bolivia", &["Plurinational State of Bolivia"], &[]),
    country("BQ", "BES", "Caribbean Netherlands", &["Bonaire", "Sint Eustatius", "Saba"], &[]),
    country("BR", "BRA", "Brazil", &["Brasil", "Federative Republic of Brazil"], &["São Paulo", "Rio de Janeiro", "Minas Gerais", "Bahia", "Rio Grande do Sul", "Paraná", "Santa Catarina", "Pernambuco", "Amazonas", "Espírito Santo"]),
    country("BS", "BHS", "Bahamas", &["The Bahamas"], &[]),
    country("BT", "BTN", "Bhutan", &[], &[]),
    country("BV", "BVT", "Bouvet Island", &[], &[]),
    country("BW", "BWA", "Botswana", &["Bechuanaland"], &[]),
    country("BY", "BLR", "Belarus", &["Byelorussia", "Belorussia", "White Russia"], &[]),
    country("BZ", "BLZ", "Belize", &["British Honduras"], &[]),
    country("CA", "CAN", "Canada", &["Dominion of Canada"], &["Ontario", "Quebec", "Québec", "Nova Scotia", "New Brunswick", "Manitoba", "British Columbia", "Prince Edward Island", "Saskatchewan", "Alberta", "Newfoundland", "Newfoundland and Labrador", "Labrador", "Yukon", "Northwest Territories", "Nunavut", "Upper Canada", "Lower Canada"]),
    country("CC", "CCK", "Cocos (Keeling) Islands", &["Cocos Islands", "Keeling Islands"], &[]),
    country("CD", "COD", "Democratic Republic of the Congo", &["DR Congo", "DRC", "Congo-Kinshasa", "Belgian Congo", "Congo Free State"], &[]),
    country("CF", "CAF", "Central African Republic", &["Centrafrique"], &[]),
    country("CG", "COG", "Congo", &["Republic of the Congo", "Congo-Brazzaville", "French Congo"], &[]),
    country("CH", "CHE", "Switzerland", &["Schweiz", "Suisse", "Svizzera", "Helvetia", "Swiss Confederation"], &["Zürich", "Bern", "Berne", "Geneva", "Genève", "Vaud", "Ticino", "Graubünden", "Lucerne", "Luzern", "Basel", "Valais", "Aargau", "St. Gallen", "Thurgau", "Fribourg", "Neuchâtel", "Glarus", "Schaffhausen", "Appenzell"]),
    country("CI", "CIV", "Côte d'Ivoire", &["Ivory Coast", "Cote dIvoire"], &[]),
    country("CK", "COK", "Cook Islands", &[], &[]),
    country("CL", "CHL", "Chile", &["Republic of Chile"], &["Valparaíso", "Araucanía", "Biobío"]),
    country("CM", "CMR", "Cameroon", &["Cameroun", "Kamerun"], &[]),
    country("CN", "CHN", "China", &["People's Republic of China", "PRC", "Zhongguo", "中国", "中國", "Cathay"], &["Guangdong", "Fujian", "Fukien", "Sichuan", "Szechwan", "Yunnan", "Hunan", "Hubei", "Zhejiang", "Jiangsu", "Shandong", "Manchuria", "Tibet", "Xinjiang", "Inner Mongolia"]),
    country("CO", "COL", "Colombia", &["Republic of Colombia", "New Granada"], &["Antioquia", "Cundinamarca"]),
    country("CR", "CRI", "Costa Rica", &[], &[]),
    country("CU", "CUB", "Cuba", &["Republic of Cuba"], &[]),
    country("CV", "CPV", "Cabo Verde", &["Cape Verde", "Cape Verde Islands"], &[]),
    country("CW", "CUW", "Curaçao", &[], &[]),
    country("CX", "CXR", "Christmas Island", &[], &[]),
    country("CY", "CYP", "Cyprus", &["Kypros", "Kıbrıs"], &[]),
    country("CZ", "CZE", "Czechia", &["Czech Republic", "Česko", "Česká republika"], &["Moravia", "Morava", "Czech Silesia"]),
    country("DE", "DEU", "Germany", &["Deutschland", "Federal Republic of Germany", "Allemagne", "Germania", "Duitsland", "Tyskland", "Niemcy"], DE_REGIONS),
    country("DJ", "DJI", "Djibouti", &["French Somaliland"], &[]),
    country("DK", "DNK", "Denmark", &["Danmark", "Dänemark", "Kingdom of Denmark"], &["Jutland", "Jylland", "Funen", "Fyn", "Zealand", "Sjælland", "Bornholm"]),
    country("DM", "DMA", "Dominica", &["Commonwealth of Dominica"], &[]),
    country("DO", "DOM", "Dominican Republic", &["Santo Domingo", "República Dominicana"], &[]),
    country("DZ", "DZA", "Algeria", &["Algérie", "Al Jazair"], &[]),
    country("EC", "ECU", "Ecuador", &["Republic of Ecuador"], &[]),
    country("EE", "EST", "Estonia", &["Eesti"], &["Livonia"]),
    country("EG", "EGY", "Egypt", &["Misr", "Arab Republic of Egypt"], &[]),
    country("EH", "ESH", "Western Sahara", &["Spanish Sahara"], &[]),
    country("ER", "ERI", "Eritrea", &[], &[]),
    country("ES", "ESP", "Spain", &["España", "Espagne", "Spanien", "Kingdom of Spain"], &["Catalonia", "Cataluña", "Catalunya", "Andalusia", "Andalucía", "Galicia", "Castile", "Castilla", "Aragon", "Navarre", "Navarra", "Basque Country", "País Vasco", "Asturias", "Valencia", "Murcia", "Extremadura", "Canary Islands", "Islas Canarias", "Balearic Islands", "Cantabria", "León"]),
    country("ET", "ETH", "Ethiopia", &[], &[]),
    country("FI", "FIN", "Finland", &["Suomi", "Finnland"], &["Ostrobothnia", "Karelia", "Uusimaa", "Lapland"]),
    country("FJ", "FJI", "Fiji", &["Fiji Islands"], &[]),
    country("FK", "FLK", "Falkland Islands", &["Falklands", "Islas Malvinas", "Malvinas"], &[]),
    country("FM", "FSM", "Micronesia", &["Federated States of Micronesia"], &[]),
    country("FO", "FRO", "Faroe Islands", &["Faroes", "Føroyar"], &[]),
    country("FR", "FRA", "France", &["French Republic", "Frankreich", "Francia", "Frankrijk", "Frankrike"], &["Normandy", "Normandie", "Brittany", "Bretagne", "Alsace", "Lorraine", "Provence", "Burgundy", "Bourgogne", "Picardy", "Picardie", "Gascony", "Gascogne", "Aquitaine", "Auvergne", "Champagne", "Corsica", "Corse", "Savoy", "Savoie", "Île-de-France", "Ile de France", "Languedoc", "Poitou", "Anjou", "Touraine", "Limousin", "Franche-Comté", "Dauphiné", "Occitanie"]),
    country("GA", "GAB", "Gabon", &["Gabonese Republic"], &[]),
    country("GB", "GBR", "United Kingdom", &["United Kingdom of Great Britain and Northern Ireland", "UK", "U.K.", "Great Britain", "Britain", "England", "Scotland", "Wales", "Northern Ireland", "Cymru", "Royaume-Uni", "Vereinigtes Königreich", "Inglaterra", "Angleterre", "Schottland"], GB_REGIONS),
    country("GD", "GRD", "Grenada", &[], &[]),
    country("GE", "GEO", "Georgia", &["Sakartvelo"], &[]),
    country("GF", "GUF", "French Guiana", &["Guyane"], &[]),
    country("GG", "GGY", "Guernsey", &["Bailiwick of Guernsey", "Alderney", "Sark"], &[]),
    country("GH", "GHA", "Ghana", &[], &[]),
    country("GI", "GIB", "Gibraltar", &[], &[]),
    country("GL", "GRL", "Greenland", &["Kalaallit Nunaat", "Grønland"], &[]),
    country("GM", "GMB", "Gambia", &["The Gambia"], &[]),
    country("GN", "GIN", "Guinea", &["Guinée", "French Guinea"], &[]),
    country("GP", "GLP", "Guadeloupe", &[], &[]),
    country("GQ", "GNQ", "Equatorial Guinea", &["Spanish Guinea"], &[]),
    country("GR", "GRC", "Greece", &["Hellas", "Ellada", "Hellenic Republic", "Griechenland", "Grèce"], &["Crete", "Thessaly", "Peloponnese", "Attica", "Epirus", "Thrace"]),
    country("GS", "SGS", "South Georgia and the South Sandwich Islands", &["South Georgia"], &[]),
    country("GT", "GTM", "Guatemala", &[], &[]),
    country("GU", "GUM", "Guam", &[], &[]),
    country("GW", "GNB", "Guinea-Bissau", &["Portuguese Guinea"], &[]),
    country("GY", "GUY", "Guyana", &["British Guiana"], &[]),
    country("HK", "HKG", "Hong Kong", &["Hongkong"], &[]),
    country("HM", "HMD", "Heard Island and McDonald Islands", &[], &[]),
    country("HN", "HND", "Honduras", &[], &[]),
    country("HR", "HRV", "Croatia", &["Hrvatska", "Kroatien"], &["Dalmatia", "Slavonia", "Istria"]),
    country("HT", "HTI", "Haiti", &["Haïti", "Hayti"], &[]),
    country("HU", "HUN", "Hungary", &["Magyarország", "Ungarn", "Hongrie"], &["Transdanubia"]),
    country("ID", "IDN", "Indonesia", &["Republic of Indonesia"], &["Java", "Sumatra", "Bali", "Borneo", "Celebes", "Sulawesi", "Moluccas"]),
    country("IE", "IRL", "Ireland", &["Éire", "Eire", "Republic of Ireland", "Irland", "Irlande"], &["Cork", "County Cork", "Kerry", "County Kerry", "Galway", "County Galway", "Mayo", "County Mayo", "Tipperary", "County Tipperary", "Limerick", "County Limerick", "Donegal", "County Donegal", "Clare", "County Clare", "Wexford", "Kilkenny", "Sligo", "Roscommon", "Munster", "Leinster", "Connacht", "Connaught", "Dublin", "County Dublin"]),
    country("IL", "ISR", "Israel", &["State of Israel"], &[]),
    country("IM", "IMN", "Isle of Man", &["Ellan Vannin"], &[]),
    country("IN", "IND", "India", &["Bharat", "Hindustan", "Republic of India", "British India"], &["Kerala", "Goa", "Bihar", "Maharashtra", "Tamil Nadu", "Uttar Pradesh", "West Bengal", "Gujarat", "Rajasthan", "Karnataka", "Madras Presidency", "Bombay Presidency", "Bengal Presidency", "Assam", "Odisha"]),
    country("IO", "IOT", "British Indian Ocean Territory", &["Chagos Islands"], &[]),
    country("IQ", "IRQ", "Iraq", &["Mesopotamia"], &[]),
    country("IR", "IRN", "Iran", &["Islamic Republic of Iran"], &[]),
    country("IS", "ISL", "Iceland", &[], &[]),
    country("IT", "ITA", "Italy", &["Italia", "Italien", "Italie", "Italian Republic"], &["Sicily", "Sicilia", "Sardinia", "Sardegna", "Tuscany", "Toscana", "Lombardy", "Lombardia", "Piedmont", "Piemonte", "Calabria", "Campania", "Apulia", "Puglia", "Veneto", "Venetia", "Liguria", "Abruzzo", "Basilicata", "Umbria", "Lazio", "Friuli", "Friuli-Venezia Giulia", "Emilia-Romagna", "Marche", "Molise", "Trentino", "South Tyrol"]),
    country("JE", "JEY", "Jersey", &["Bailiwick of Jersey"], &[]),
    country("JM", "JAM", "Jamaica", &[], &[]),
    country("JO", "JOR", "Jordan", &["Transjordan", "Hashemite Kingdom of Jordan"], &[]),
    country("JP", "JPN", "Japan", &["Nippon", "Nihon", "日本"], &["Hokkaido", "Honshu", "Kyushu", "Shikoku", "Okinawa"]),
    country("KE", "KEN", "Kenya", &["British East Africa"], &[]),
    country("KG", "KGZ", "Kyrgyzstan", &["Kirghizia", "Kyrgyz Republic"], &[]),
    country("KH", "KHM", "Cambodia", &["Kampuchea", "Khmer Republic"], &[]),
    country("KI", "KIR", "Kiribati", &["Gilbert Islands"], &[]),
    country("KM", "COM", "Comoros", &["Comores"], &[]),
    country("KN", "KNA", "Saint Kitts and Nevis", &["St. Kitts", "St Kitts", "Nevis"], &[]),
    country("KP", "PRK", "North Korea", &["Democratic People's Republic of Korea", "DPRK", "Korea, North"], &[]),
    country("KR", "KOR", "South Korea", &["Republic of Korea", "Korea, Republic of", "Korea, South", "Korea", "Hanguk"], &["Gyeonggi", "Jeju"]),
    country("KW", "KWT", "Kuwait", &[], &[]),
    country("KY", "CYM", "Cayman Islands", &["Caymans"], &[]),
    country("KZ", "KAZ", "Kazakhstan", &["Qazaqstan"], &[]),
    country("LA", "LAO", "Laos", &["Lao People's Democratic Republic", "Lao PDR"], &[]),
    country("LB", "LBN", "Lebanon", &["Liban", "Lubnan"], &[]),
    country("LC", "LCA", "Saint Lucia", &["St. Lucia", "St Lucia"], &[]),
    country("LI", "LIE", "Liechtenstein", &[], &[]),
    country("LK", "LKA", "Sri Lanka", &["Lanka"], &[]),
    country("LR", "LBR", "Liberia", &[], &[]),
    country("LS", "LSO", "Lesotho", &["Basutoland"], &[]),
    country("LT", "LTU", "Lithuania", &["Lietuva", "Litauen"], &["Samogitia"]),
    country("LU", "LUX", "Luxembourg", &["Lëtzebuerg", "Luxemburg", "Grand Duchy of Luxembourg"], &[]),
    country("LV", "LVA", "Latvia", &["Latvija", "Lettland"], &["Courland", "Kurzeme", "Latgale"]),
    country("LY", "LBY", "Libya", &["Libia"], &["Tripolitania", "Cyrenaica"]),
    country("MA", "MAR", "Morocco", &["Maroc", "Al Maghrib"], &[]),
    country("MC", "MCO", "Monaco", &[], &[]),
    country("MD", "MDA", "Moldova", &["Republic of Moldova", "Moldavia"], &["Bessarabia"]),
    country("ME", "MNE", "Montenegro", &["Crna Gora"], &[]),
    country("MF", "MAF", "Saint Martin", &["St. Martin", "Saint-Martin"], &[]),
    country("MG", "MDG", "Madagascar", &["Malagasy Republic"], &[]),
    country("MH", "MHL", "Marshall Islands", &[], &[]),
    country("MK", "MKD", "North Macedonia", &["Macedonia", "Republic of North Macedonia", "FYROM"], &[]),
    country("ML", "MLI", "Mali", &["French Sudan"], &[]),
    country("MM", "MMR", "Myanmar", &["Burma", "Union of Burma"], &[]),
    country("MN", "MNG", "Mongolia", &["Outer Mongolia", "Mongol Uls"], &[]),
    country("MO", "MAC", "Macao", &["Macau"], &[]),
    country("MP", "MNP", "Northern Mariana Islands", &["Saipan"], &[]),
    country("MQ", "MTQ", "Martinique", &[], &[]),
    country("MR", "MRT", "Mauritania", &["Mauritanie"], &[]),
    country("MS", "MSR", "Montserrat", &[], &[]),
    country("MT", "MLT", "Malta", &["Gozo"], &[]),
    country("MU", "MUS", "Mauritius", &["Île Maurice"], &[]),
    country("MV", "MDV", "Maldives", &["Maldive Islands"], &[]),
    country("MW", "MWI", "Malawi", &["Nyasaland"], &[]),
    country("MX", "MEX", "Mexico", &["México", "United Mexican States", "Estados Unidos Mexicanos", "Mexiko"], &["Jalisco", "Chihuahua", "Sonora", "Oaxaca", "Yucatán", "Veracruz", "Nuevo León", "Baja California", "Zacatecas", "Coahuila", "Durango", "Michoacán", "Puebla", "Guanajuato", "Tamaulipas", "Sinaloa", "Chiapas", "Guerrero", "Hidalgo", "Tabasco"]),
    country("MY", "MYS", "Malaysia", &["Malaya", "Federation of Malaya"], &["Sabah", "Sarawak", "Penang", "Johor", "Selangor"]),
    country("MZ", "MOZ", "Mozambique", &["Moçambique", "Portuguese East Africa"], &[]),
    country("NA", "NAM", "Namibia", &["South West Africa"], &[]),
    country("NC", "NCL", "New Caledonia", &["Nouvelle-Calédonie"], &[]),
    country("NE", "NER", "Niger", &[], &[]),
    country("NF", "NFK", "Norfolk Island", &[], &[]),
    country("NG", "NGA", "Nigeria", &["Federal Republic of Nigeria"], &["Lagos"]),
    country("NI", "NIC", "Nicaragua", &[], &[]),
    country("NL", "NLD", "Netherlands", &["The Netherlands", "Nederland", "Holland", "Niederlande", "Pays-Bas", "Kingdom of the Netherlands"], &["North Holland", "Noord-Holland", "South Holland", "Zuid-Holland", "Friesland", "Fryslân", "Groningen", "Gelderland", "Utrecht", "Overijssel", "Drenthe", "Zeeland", "North Brabant", "Noord-Brabant", "Flevoland"]),
    country("NO", "NOR", "Norway", &["Norge", "Noreg", "Norwegen", "Kingdom of Norway"], &["Akershus", "Hedmark", "Oppland", "Telemark", "Rogaland", "Hordaland", "Trøndelag", "Nordland", "Finnmark", "Østfold", "Vestfold", "Buskerud"]),
    country("NP", "NPL", "Nepal", &[], &[]),
    country("NR", "NRU", "Nauru", &[], &[]),
    country("NU", "NIU", "Niue", &[], &[]),
    country("NZ", "NZL", "New Zealand", &["Aotearoa"], &["Auckland", "Otago", "Wellington", "Southland", "Taranaki"]),
    country("OM", "OMN", "Oman", &["Muscat and Oman"], &[]),
    country("PA", "PAN", "Panama", &["Panamá", "Republic of Panama"], &["Panama Canal Zone"]),
    country("PE", "PER", "Peru", &["Perú", "Republic of Peru"], &[]),
    country("PF", "PYF", "French Polynesia", &["Tahiti", "Polynésie française"], &[]),
    country("PG", "PNG", "Papua New Guinea", &["Papua"], &[]),
    country("PH", "PHL", "Philippines", &["Philippine Islands", "Pilipinas", "Republic of the Philippines"], &["Luzon", "Mindanao", "Visayas"]),
    country("PK", "PAK", "Pakistan", &[], &["Sindh", "Balochistan", "Khyber Pakhtunkhwa"]),
    country("PL", "POL", "Poland", &["Polska", "Polen", "Pologne", "Republic of Poland"], &["Mazovia", "Masovia", "Lesser Poland", "Greater Poland", "Podlasie", "Lublin", "Kuyavia"]),
    country("PM", "SPM", "Saint Pierre and Miquelon", &["St. Pierre and Miquelon"], &[]),
    country("PN", "PCN", "Pitcairn", &["Pitcairn Islands"], &[]),
    country("PR", "PRI", "Puerto Rico", &["Porto Rico", "Borinquen"], &[]),
    country("PS", "PSE", "Palestine", &["State of Palestine", "Palestine, State of", "Palestinian Territories"], &["Gaza", "West Bank"]),
    country("PT", "PRT", "Portugal", &["Portuguese Republic"], &["Azores", "Açores", "Madeira", "Algarve", "Alentejo", "Minho", "Trás-os-Montes"]),
    country("PW", "PLW", "Palau", &["Belau"], &[]),
    country("PY", "PRY", "Paraguay", &[], &[]),
    country("QA", "QAT", "Qatar", &[], &[]),
    country("RE", "REU", "Réunion", &["Reunion", "Île Bourbon"], &[]),
    country("RO", "ROU", "Romania", &["România", "Rumania", "Roumania", "Rumänien"], &["Transylvania", "Wallachia", "Banat", "Bukovina", "Dobruja"]),
    country("RS", "SRB", "Serbia", &["Srbija", "Republic of Serbia"], &["Vojvodina"]),
    country("RU", "RUS", "Russia", &["Russian Federation", "Rossiya", "Россия", "Russland", "Russie"], &["Siberia", "Sibir", "Moscow Oblast", "Volga"]),
    country("RW", "RWA", "Rwanda", &[], &[]),
    country("SA", "SAU", "Saudi Arabia", &["Kingdom of Saudi Arabia", "KSA"], &["Hejaz", "Najd"]),
    country("SB", "SLB", "Solomon Islands", &["British Solomon Islands"], &[]),
    country("SC", "SYC", "Seychelles", &[], &[]),
    country("SD", "SDN", "Sudan", &["Anglo-Egyptian Sudan"], &[]),
    country("SE", "SWE", "Sweden", &["Sverige", "Schweden", "Suède", "Kingdom of Sweden"], &["Skåne", "Scania", "Småland", "Värmland", "Dalarna", "Gotland", "Östergötland", "Västergötland", "Uppland", "Norrland", "Halland", "Blekinge", "Öland"]),
    country("SG", "SGP", "Singapore", &["Singapura"], &[]),
    country("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", &["Saint Helena", "St. Helena", "Ascension Island", "Tristan da Cunha"], &[]),
    country("SI", "SVN", "Slovenia", &["Slovenija"], &["Carniola", "Styrian Slovenia"]),
    country("SJ", "SJM", "Svalbard and Jan Mayen", &["Svalbard", "Spitsbergen"], &[]),
    country("SK", "SVK", "Slovakia", &["Slovensko", "Slovak Republic"], &[]),
    country("SL", "SLE", "Sierra Leone", &[], &[]),
    country("SM", "SMR", "San Marino", &[], &[]),
    country("SN", "SEN", "Senegal", &["Sénégal"], &[]),
    country("SO", "SOM", "Somalia", &["Somaliland", "Italian Somaliland"], &[]),
    country("SR", "SUR", "Suriname", &["Surinam", "Dutch Guiana"], &[]),
    country("SS", "SSD", "South Sudan", &[], &[]),
    country("ST", "STP", "Sao Tome and Principe", &["São Tomé and Príncipe", "Sao Tome"], &[]),
    country("SV", "SLV", "El Salvador", &[], &[]),
    country("SX", "SXM", "Sint Maarten", &[], &[]),
    country("SY", "SYR", "Syria", &["Syrian Arab Republic"], &[]),
    country("SZ", "SWZ", "Eswatini", &["Swaziland"], &[]),
    country("TC", "TCA", "Turks and Caicos Islands", &["Turks and Caicos"], &[]),
    country("TD", "TCD", "Chad", &["Tchad"], &[]),
    country("TF", "ATF", "French Southern Territories", &["French Southern and Antarctic Lands"], &[]),
    country("TG", "TGO", "Togo", &["Togoland"], &[]),
    country("TH", "THA", "Thailand", &["Kingdom of Thailand", "Prathet Thai"], &[]),
    country("TJ", "TJK", "Tajikistan", &["Tadzhikistan"], &[]),
    country("TK", "TKL", "Tokelau", &[], &[]),
    country("TL", "TLS", "Timor-Leste", &["East Timor", "Portuguese Timor"], &[]),
    country("TM", "TKM", "Turkmenistan", &["Turkmenia"], &[]),
    country("TN", "TUN", "Tunisia", &["Tunisie"], &[]),
    country("TO", "TON", "Tonga", &["Friendly Islands"], &[]),
    country("TR", "TUR", "Turkey", &["Türkiye", "Republic of Turkey", "Türkei", "Turquie"], &["Anatolia", "Asia Minor"]),
    country("TT", "TTO", "Trinidad and Tobago", &["Trinidad", "Tobago"], &[]),
    country("TV", "TUV", "Tuvalu", &["Ellice Islands"], &[]),
    country("TW", "TWN", "Taiwan", &["Republic of China", "Formosa", "臺灣", "台灣"], &[]),
    country("TZ", "TZA", "Tanzania", &["United Republic of Tanzania"], &["Zanzibar"]),
    country("UA", "UKR", "Ukraine", &["Ukraina", "Україна", "The Ukraine"], &["Volhynia", "Podolia", "Galicia-Volhynia", "Kyiv Oblast", "Zaporizhzhia", "Transcarpathia"]),
    country("UG", "UGA", "Uganda", &[], &[]),
    country("UM", "UMI", "United States Minor Outlying Islands", &["Wake Island", "Midway Islands"], &[]),
    country("US", "USA", "United States", &["United States of America", "U.S.A.", "U.S.", "America", "Estados Unidos", "Vereinigte Staaten", "États-Unis", "Verenigde Staten"], US_STATES),
    country("UY", "URY", "Uruguay", &["Banda Oriental"], &[]),
    country("UZ", "UZB", "Uzbekistan", &["Uzbekiston"], &[]),
    country("VA", "VAT", "Holy See", &["Vatican City", "Vatican", "Vatican City State"], &[]),
    country("VC", "VCT", "Saint Vincent and the Grenadines", &["St. Vincent", "Saint Vincent"], &[]),
    country("VE", "VEN", "Venezuela", &["Bolivarian Republic of Venezuela"], &[]),
    country("VG", "VGB", "British Virgin Islands", &["Virgin Islands, British"], &[]),
    country("VI", "VIR", "United States Virgin Islands", &["US Virgin Islands", "Virgin Islands, U.S.", "Danish West Indies"], &[]),
    country("VN", "VNM", "Vietnam", &["Viet Nam", "Việt Nam", "Socialist Republic of Vietnam"], &["Tonkin", "Annam", "Cochinchina"]),
    country("VU", "VUT", "Vanuatu", &["New Hebrides"], &[]),
    country("WF", "WLF", "Wallis and Futuna", &[], &[]),
    country("WS", "WSM", "Samoa", &["Western Samoa"], &[]),
    country("YE", "YEM", "Yemen", &["Republic of Yemen"], &["Aden", "Hadhramaut"]),
    country("YT", "MYT", "Mayotte", &[], &[]),
    country("ZA", "ZAF", "South Africa", &["Republic of South Africa", "Suid-Afrika", "Union of South Africa", "RSA"], &["Transvaal", "Natal", "KwaZulu-Natal", "Cape Province", "Cape Colony", "Orange Free State", "Gauteng", "Western Cape", "Eastern Cape"]),
    country("ZM", "ZMB", "Zambia", &["Northern Rhodesia"], &[]),
    country("ZW", "ZWE", "Zimbabwe", &[], &[]),
];

// ── Defunct states ───────────────────────────────────────────────────

pub struct HistoricalEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Present-day country the state resolves to
    pub iso2: &'static str,
    pub iso3: &'static str,
    /// ISO code the state itself held, where it had one
    pub former_code: Option<&'static str>,
    pub valid_from: i32,
    pub valid_to: i32,
}

const fn historical(
    name: &'static str,
    aliases: &'static [&'static str],
    iso2: &'static str,
    iso3: &'static str,
    former_code: Option<&'static str>,
    valid_from: i32,
    valid_to: i32,
) -> HistoricalEntry {
    HistoricalEntry {
        name,
        aliases,
        iso2,
        iso3,
        former_code,
        valid_from,
        valid_to,
    }
}

#[rustfmt::skip]
pub static HISTORICAL: &[HistoricalEntry] = &[
    historical("East Germany", &["German Democratic Republic", "GDR", "DDR", "Deutsche Demokratische Republik"], "DE", "DEU", Some("DD"), 1949, 1990),
    historical("West Germany", &["BRD", "FRG", "Bundesrepublik Deutschland"], "DE", "DEU", None, 1949, 1990),
    historical("Prussia", &["Kingdom of Prussia", "Preußen"], "DE", "DEU", None, 1701, 1947),
    historical("German Empire", &["Deutsches Reich", "Deutsches Kaiserreich", "Imperial Germany"], "DE", "DEU", None, 1871, 1945),
    historical("Holy Roman Empire", &["Heiliges Römisches Reich"], "DE", "DEU", None, 962, 1806),
    historical("Soviet Union", &["USSR", "U.S.S.R.", "Union of Soviet Socialist Republics", "СССР"], "RU", "RUS", Some("SU"), 1922, 1991),
    historical("Russian Empire", &["Imperial Russia", "Российская империя"], "RU", "RUS", None, 1721, 1917),
    historical("South Vietnam", &["Republic of Vietnam", "State of Vietnam"], "VN", "VNM", None, 1949, 1975),
    historical("North Vietnam", &["Democratic Republic of Vietnam"], "VN", "VNM", None, 1945, 1976),
    historical("French Indochina", &["Indochine française"], "VN", "VNM", None, 1887, 1954),
    historical("Czechoslovakia", &["Czecho-Slovakia", "Československo", "Czechoslovak Socialist Republic"], "CZ", "CZE", Some("CS"), 1918, 1992),
    historical("Bohemia", &["Kingdom of Bohemia", "Böhmen", "Čechy"], "CZ", "CZE", None, 1198, 1918),
    historical("Yugoslavia", &["Kingdom of Yugoslavia", "Socialist Federal Republic of Yugoslavia", "Federal Republic of Yugoslavia", "Jugoslavija", "Kingdom of Serbs, Croats and Slovenes"], "RS", "SRB", Some("YU"), 1918, 2003),
    historical("Serbia and Montenegro", &["State Union of Serbia and Montenegro"], "RS", "SRB", Some("CS"), 2003, 2006),
    historical("Austria-Hungary", &["Austro-Hungarian Empire", "Österreich-Ungarn"], "AT", "AUT", None, 1867, 1918),
    historical("Austrian Empire", &["Kaisertum Österreich"], "AT", "AUT", None, 1804, 1867),
    historical("Ottoman Empire", &["Turkish Empire", "Osmanlı İmparatorluğu", "Sublime Porte"], "TR", "TUR", None, 1299, 1922),
    historical("Persia", &["Qajar Persia", "Imperial State of Persia"], "IR", "IRN", None, 1501, 1935),
    historical("Siam", &["Kingdom of Siam"], "TH", "THA", None, 1350, 1939),
    historical("Ceylon", &["Dominion of Ceylon", "British Ceylon"], "LK", "LKA", None, 1815, 1972),
    historical("Rhodesia", &["Southern Rhodesia", "Republic of Rhodesia", "Zimbabwe Rhodesia"], "ZW", "ZWE", Some("RH"), 1923, 1979),
    historical("Zaire", &["Republic of Zaire"], "CD", "COD", Some("ZR"), 1971, 1997),
    historical("Upper Volta", &["Republic of Upper Volta", "Haute-Volta"], "BF", "BFA", Some("HV"), 1958, 1984),
    historical("Dahomey", &["Republic of Dahomey", "French Dahomey"], "BJ", "BEN", Some("DY"), 1904, 1975),
    historical("East Pakistan", &[], "BD", "BGD", None, 1955, 1971),
    historical("Gold Coast", &["Gold Coast Colony"], "GH", "GHA", None, 1821, 1957),
    historical("Tanganyika", &["Tanganyika Territory"], "TZ", "TZA", None, 1916, 1964),
    historical("Abyssinia", &["Ethiopian Empire"], "ET", "ETH", None, 1270, 1974),
    historical("Dutch East Indies", &["Netherlands East Indies", "Nederlands-Indië"], "ID", "IDN", None, 1800, 1949),
    historical("Irish Free State", &["Saorstát Éireann"], "IE", "IRL", None, 1922, 1937),
    historical("Kingdom of Piedmont-Sardinia", &["Piedmont-Sardinia"], "IT", "ITA", None, 1720, 1861),
    historical("Kingdom of the Two Sicilies", &["Two Sicilies", "Regno delle Due Sicilie"], "IT", "ITA", None, 1816, 1861),
    historical("Papal States", &["Stato Pontificio", "States of the Church"], "IT", "ITA", None, 756, 1870),
    historical("Hawaiian Kingdom", &[], "US", "USA", None, 1795, 1898),
    historical("Netherlands Antilles", &["Nederlandse Antillen"], "CW", "CUW", Some("AN"), 1954, 2010),
    historical("Grand Duchy of Finland", &["Grand Principality of Finland"], "FI", "FIN", None, 1809, 1917),
    historical("Polish-Lithuanian Commonwealth", &["Rzeczpospolita Obojga Narodów"], "PL", "POL", None, 1569, 1795),
    historical("Congress Poland", &["Kingdom of Poland", "Russian Poland"], "PL", "POL", None, 1815, 1915),
];
