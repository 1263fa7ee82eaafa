//! Built-in lookup tables.
//!
//! These are the process-wide defaults. [`crate::AggregatorConfig`] can add
//! entries on top of them but never removes any.

/// Lowercased alias -> canonical country name.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    // United States
    ("us", "United States"),
    ("usa", "United States"),
    ("u.s.", "United States"),
    ("u.s", "United States"),
    ("u.s.a.", "United States"),
    ("u.s.a", "United States"),
    ("united states", "United States"),
    ("united states of america", "United States"),
    ("america", "United States"),
    // United Kingdom
    ("uk", "United Kingdom"),
    ("u.k.", "United Kingdom"),
    ("gb", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("united kingdom", "United Kingdom"),
    ("england", "United Kingdom"),
    ("scotland", "United Kingdom"),
    ("wales", "United Kingdom"),
    ("northern ireland", "United Kingdom"),
    // Europe
    ("il", "Israel"),
    ("isr", "Israel"),
    ("israel", "Israel"),
    ("de", "Germany"),
    ("deu", "Germany"),
    ("deutschland", "Germany"),
    ("fr", "France"),
    ("nl", "Netherlands"),
    ("the netherlands", "Netherlands"),
    ("holland", "Netherlands"),
    ("ie", "Ireland"),
    ("es", "Spain"),
    ("españa", "Spain"),
    ("espana", "Spain"),
    ("pt", "Portugal"),
    ("pl", "Poland"),
    ("polska", "Poland"),
    ("cz", "Czech Republic"),
    ("czechia", "Czech Republic"),
    ("se", "Sweden"),
    ("dk", "Denmark"),
    ("no", "Norway"),
    ("fi", "Finland"),
    ("ch", "Switzerland"),
    ("schweiz", "Switzerland"),
    ("at", "Austria"),
    ("österreich", "Austria"),
    ("be", "Belgium"),
    ("it", "Italy"),
    ("italia", "Italy"),
    ("ro", "Romania"),
    ("ee", "Estonia"),
    ("ua", "Ukraine"),
    // Americas
    ("ca", "Canada"),
    ("mx", "Mexico"),
    ("méxico", "Mexico"),
    ("br", "Brazil"),
    ("brasil", "Brazil"),
    ("ar", "Argentina"),
    // Asia-Pacific, Middle East, Africa
    ("in", "India"),
    ("ind", "India"),
    ("au", "Australia"),
    ("aus", "Australia"),
    ("nz", "New Zealand"),
    ("sg", "Singapore"),
    ("jp", "Japan"),
    ("cn", "China"),
    ("prc", "China"),
    ("hk", "Hong Kong"),
    ("kr", "South Korea"),
    ("korea", "South Korea"),
    ("ae", "United Arab Emirates"),
    ("uae", "United Arab Emirates"),
    ("u.a.e.", "United Arab Emirates"),
    ("za", "South Africa"),
    ("ph", "Philippines"),
    ("vn", "Vietnam"),
    ("viet nam", "Vietnam"),
];

/// Lowercased city key -> (display name, country).
pub const CITIES: &[(&str, &str, &str)] = &[
    // Israel
    ("tel aviv", "Tel Aviv", "Israel"),
    ("tel-aviv", "Tel Aviv", "Israel"),
    ("tel aviv-yafo", "Tel Aviv", "Israel"),
    ("jerusalem", "Jerusalem", "Israel"),
    ("haifa", "Haifa", "Israel"),
    ("herzliya", "Herzliya", "Israel"),
    ("ramat gan", "Ramat Gan", "Israel"),
    ("petah tikva", "Petah Tikva", "Israel"),
    ("petach tikva", "Petah Tikva", "Israel"),
    ("netanya", "Netanya", "Israel"),
    ("beer sheva", "Beersheba", "Israel"),
    ("be'er sheva", "Beersheba", "Israel"),
    ("rehovot", "Rehovot", "Israel"),
    ("raanana", "Ra'anana", "Israel"),
    ("ra'anana", "Ra'anana", "Israel"),
    ("yokneam", "Yokneam", "Israel"),
    // India
    ("bangalore", "Bangalore", "India"),
    ("bengaluru", "Bangalore", "India"),
    ("mumbai", "Mumbai", "India"),
    ("bombay", "Mumbai", "India"),
    ("delhi", "Delhi", "India"),
    ("new delhi", "New Delhi", "India"),
    ("hyderabad", "Hyderabad", "India"),
    ("pune", "Pune", "India"),
    ("chennai", "Chennai", "India"),
    ("gurgaon", "Gurugram", "India"),
    ("gurugram", "Gurugram", "India"),
    ("noida", "Noida", "India"),
    ("kolkata", "Kolkata", "India"),
    ("ahmedabad", "Ahmedabad", "India"),
    // United States
    ("new york", "New York", "United States"),
    ("new york city", "New York", "United States"),
    ("nyc", "New York", "United States"),
    ("san francisco", "San Francisco", "United States"),
    ("seattle", "Seattle", "United States"),
    ("austin", "Austin", "United States"),
    ("boston", "Boston", "United States"),
    ("chicago", "Chicago", "United States"),
    ("los angeles", "Los Angeles", "United States"),
    ("denver", "Denver", "United States"),
    ("atlanta", "Atlanta", "United States"),
    ("miami", "Miami", "United States"),
    ("san jose", "San Jose", "United States"),
    ("palo alto", "Palo Alto", "United States"),
    ("mountain view", "Mountain View", "United States"),
    ("menlo park", "Menlo Park", "United States"),
    ("sunnyvale", "Sunnyvale", "United States"),
    ("san diego", "San Diego", "United States"),
    ("portland", "Portland", "United States"),
    ("dallas", "Dallas", "United States"),
    ("houston", "Houston", "United States"),
    ("philadelphia", "Philadelphia", "United States"),
    ("pittsburgh", "Pittsburgh", "United States"),
    ("salt lake city", "Salt Lake City", "United States"),
    ("raleigh", "Raleigh", "United States"),
    ("washington dc", "Washington", "United States"),
    // United Kingdom
    ("london", "London", "United Kingdom"),
    ("manchester", "Manchester", "United Kingdom"),
    ("edinburgh", "Edinburgh", "United Kingdom"),
    ("cambridge", "Cambridge", "United Kingdom"),
    ("oxford", "Oxford", "United Kingdom"),
    ("bristol", "Bristol", "United Kingdom"),
    ("glasgow", "Glasgow", "United Kingdom"),
    ("belfast", "Belfast", "United Kingdom"),
    ("leeds", "Leeds", "United Kingdom"),
    // Rest of Europe
    ("berlin", "Berlin", "Germany"),
    ("munich", "Munich", "Germany"),
    ("münchen", "Munich", "Germany"),
    ("hamburg", "Hamburg", "Germany"),
    ("frankfurt", "Frankfurt", "Germany"),
    ("cologne", "Cologne", "Germany"),
    ("köln", "Cologne", "Germany"),
    ("stuttgart", "Stuttgart", "Germany"),
    ("paris", "Paris", "France"),
    ("lyon", "Lyon", "France"),
    ("toulouse", "Toulouse", "France"),
    ("amsterdam", "Amsterdam", "Netherlands"),
    ("rotterdam", "Rotterdam", "Netherlands"),
    ("utrecht", "Utrecht", "Netherlands"),
    ("eindhoven", "Eindhoven", "Netherlands"),
    ("dublin", "Dublin", "Ireland"),
    ("cork", "Cork", "Ireland"),
    ("madrid", "Madrid", "Spain"),
    ("barcelona", "Barcelona", "Spain"),
    ("valencia", "Valencia", "Spain"),
    ("lisbon", "Lisbon", "Portugal"),
    ("porto", "Porto", "Portugal"),
    ("warsaw", "Warsaw", "Poland"),
    ("krakow", "Krakow", "Poland"),
    ("kraków", "Krakow", "Poland"),
    ("wroclaw", "Wroclaw", "Poland"),
    ("prague", "Prague", "Czech Republic"),
    ("brno", "Brno", "Czech Republic"),
    ("stockholm", "Stockholm", "Sweden"),
    ("copenhagen", "Copenhagen", "Denmark"),
    ("oslo", "Oslo", "Norway"),
    ("helsinki", "Helsinki", "Finland"),
    ("zurich", "Zurich", "Switzerland"),
    ("zürich", "Zurich", "Switzerland"),
    ("geneva", "Geneva", "Switzerland"),
    ("vienna", "Vienna", "Austria"),
    ("brussels", "Brussels", "Belgium"),
    ("milan", "Milan", "Italy"),
    ("rome", "Rome", "Italy"),
    ("bucharest", "Bucharest", "Romania"),
    ("cluj-napoca", "Cluj-Napoca", "Romania"),
    ("tallinn", "Tallinn", "Estonia"),
    ("kyiv", "Kyiv", "Ukraine"),
    ("kiev", "Kyiv", "Ukraine"),
    ("lviv", "Lviv", "Ukraine"),
    // Americas
    ("toronto", "Toronto", "Canada"),
    ("vancouver", "Vancouver", "Canada"),
    ("montreal", "Montreal", "Canada"),
    ("ottawa", "Ottawa", "Canada"),
    ("waterloo", "Waterloo", "Canada"),
    ("mexico city", "Mexico City", "Mexico"),
    ("guadalajara", "Guadalajara", "Mexico"),
    ("sao paulo", "São Paulo", "Brazil"),
    ("são paulo", "São Paulo", "Brazil"),
    ("rio de janeiro", "Rio de Janeiro", "Brazil"),
    ("buenos aires", "Buenos Aires", "Argentina"),
    // Asia-Pacific, Middle East, Africa
    ("sydney", "Sydney", "Australia"),
    ("melbourne", "Melbourne", "Australia"),
    ("brisbane", "Brisbane", "Australia"),
    ("auckland", "Auckland", "New Zealand"),
    ("singapore", "Singapore", "Singapore"),
    ("tokyo", "Tokyo", "Japan"),
    ("osaka", "Osaka", "Japan"),
    ("beijing", "Beijing", "China"),
    ("shanghai", "Shanghai", "China"),
    ("shenzhen", "Shenzhen", "China"),
    ("hong kong", "Hong Kong", "Hong Kong"),
    ("seoul", "Seoul", "South Korea"),
    ("dubai", "Dubai", "United Arab Emirates"),
    ("abu dhabi", "Abu Dhabi", "United Arab Emirates"),
    ("cape town", "Cape Town", "South Africa"),
    ("johannesburg", "Johannesburg", "South Africa"),
    ("manila", "Manila", "Philippines"),
    ("ho chi minh city", "Ho Chi Minh City", "Vietnam"),
    ("hanoi", "Hanoi", "Vietnam"),
];

/// U.S. state and territory postal codes.
pub const US_STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "PR", "GU", "VI",
];

/// Job boards and ATS hosts whose postings are accepted for any company.
pub const TRUSTED_JOB_HOSTS: &[&str] = &[
    "linkedin.com",
    "greenhouse.io",
    "lever.co",
    "workable.com",
    "ashbyhq.com",
    "smartrecruiters.com",
    "myworkdayjobs.com",
    "bamboohr.com",
    "recruitee.com",
    "breezy.hr",
    "comeet.com",
    "comeet.co",
    "teamtailor.com",
    "personio.de",
    "personio.com",
    "jobvite.com",
    "icims.com",
    "applytojob.com",
    "wellfound.com",
];

/// Host fragments that mark fabricated or template URLs.
pub const RED_FLAG_HOST_FRAGMENTS: &[&str] = &[
    "example",
    "sample",
    "placeholder",
    "localhost",
    "dummy",
    "yourcompany",
    "yourdomain",
    "lorem",
];

/// Anchor texts that are not real job titles.
pub const DEGENERATE_TITLES: &[&str] = &[
    "apply",
    "apply now",
    "apply here",
    "learn more",
    "read more",
    "see more",
    "more",
    "view job",
    "view details",
    "details",
    "careers",
    "jobs",
    "job",
    "open positions",
    "click here",
];
