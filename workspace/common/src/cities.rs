/// Built-in city names offered as suggestions.
pub const CITIES: &[&str] = &[
    "Abu Dhabi", "Accra", "Addis Ababa", "Adelaide", "Ahmedabad", "Algiers", "Almaty",
    "Amsterdam", "Ankara", "Athens", "Atlanta", "Auckland", "Austin", "Baghdad", "Baku",
    "Baltimore", "Bangalore", "Bangkok", "Barcelona", "Beijing", "Beirut", "Belgrade",
    "Berlin", "Bern", "Bilbao", "Birmingham", "Bogota", "Boston", "Bratislava", "Brisbane",
    "Brussels", "Bucharest", "Budapest", "Buenos Aires", "Cairo", "Calgary", "Cape Town",
    "Caracas", "Casablanca", "Charlotte", "Chennai", "Chicago", "Cologne", "Copenhagen",
    "Dakar", "Dallas", "Damascus", "Dar es Salaam", "Delhi", "Denver", "Detroit", "Dhaka",
    "Doha", "Dubai", "Dublin", "Durban", "Edinburgh", "Florence", "Frankfurt", "Geneva",
    "Glasgow", "Guadalajara", "Guangzhou", "Hamburg", "Hanoi", "Havana", "Helsinki",
    "Ho Chi Minh City", "Hong Kong", "Honolulu", "Houston", "Hyderabad", "Indianapolis",
    "Istanbul", "Jacksonville", "Jakarta", "Jerusalem", "Johannesburg", "Kabul", "Karachi",
    "Kathmandu", "Kyiv", "Kolkata", "Krakow", "Kuala Lumpur", "Kuwait City", "Lagos",
    "Lahore", "Las Vegas", "Leeds", "Lima", "Lisbon", "Liverpool", "Ljubljana", "London",
    "Los Angeles", "Louisville", "Lyon", "Madrid", "Manchester", "Manila", "Marseille",
    "Melbourne", "Memphis", "Mexico City", "Miami", "Milan", "Minneapolis", "Minsk",
    "Montevideo", "Montreal", "Moscow", "Mumbai", "Munich", "Nairobi", "Naples", "Nashville",
    "New Orleans", "New York", "Nice", "Osaka", "Oslo", "Ottawa", "Panama City", "Paris",
    "Perth", "Philadelphia", "Phoenix", "Portland", "Porto", "Prague", "Quebec City", "Quito",
    "Reykjavik", "Riga", "Rio de Janeiro", "Riyadh", "Rome", "Rotterdam", "Saint Petersburg",
    "Salt Lake City", "San Antonio", "San Diego", "San Francisco", "San Jose", "Santiago",
    "Sao Paulo", "Seattle", "Seoul", "Seville", "Shanghai", "Shenzhen", "Singapore", "Sofia",
    "Stockholm", "Stuttgart", "Sydney", "Taipei", "Tallinn", "Tashkent", "Tbilisi", "Tehran",
    "Tel Aviv", "Tokyo", "Toronto", "Tunis", "Turin", "Valencia", "Vancouver", "Venice",
    "Vienna", "Vilnius", "Warsaw", "Washington", "Wellington", "Winnipeg", "Wuhan", "Yerevan",
    "Yokohama", "Zagreb", "Zurich",
];
