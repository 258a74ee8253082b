//! Built-in reference data
//!
//! Canonical names are grouped by category. The order of the groups and of
//! the names inside them is the lexicon's iteration order, which the
//! categorizer's substring step depends on.

use super::CategoryId;

/// Canonical item names per category, in iteration order
pub(super) const CATALOG: &[(CategoryId, &[&str])] = &[
    (
        CategoryId::Produce,
        &[
            "apples",
            "bananas",
            "oranges",
            "lemons",
            "limes",
            "grapes",
            "strawberries",
            "blueberries",
            "raspberries",
            "blackberries",
            "mangoes",
            "pineapple",
            "watermelon",
            "cantaloupe",
            "peaches",
            "pears",
            "plums",
            "cherries",
            "kiwi",
            "avocado",
            "pomegranate",
            "papaya",
            "guava",
            "coconut",
            "figs",
            "lychee",
            "jackfruit",
            "tomatoes",
            "potatoes",
            "sweet potatoes",
            "onions",
            "red onions",
            "spring onions",
            "shallots",
            "leeks",
            "garlic",
            "ginger",
            "carrots",
            "cucumber",
            "zucchini",
            "eggplant",
            "bell pepper",
            "green chili",
            "jalapeno",
            "broccoli",
            "cauliflower",
            "cabbage",
            "napa cabbage",
            "bok choy",
            "spinach",
            "lettuce",
            "kale",
            "arugula",
            "celery",
            "mushrooms",
            "corn",
            "peas",
            "green beans",
            "bean sprouts",
            "okra",
            "radish",
            "beetroot",
            "pumpkin",
            "butternut squash",
            "bitter gourd",
            "bottle gourd",
            "asparagus",
            "brussels sprouts",
            "taro",
            "cassava",
            "lemongrass",
            "cilantro",
            "mint",
            "basil",
            "parsley",
            "curry leaves",
            "fenugreek leaves",
        ],
    ),
    (
        CategoryId::AsianPantry,
        &[
            "basmati rice",
            "jasmine rice",
            "brown rice",
            "sushi rice",
            "sticky rice",
            "sona masoori rice",
            "rice",
            "flattened rice",
            "rice flour",
            "rice noodles",
            "udon noodles",
            "soba noodles",
            "ramen noodles",
            "egg noodles",
            "glass noodles",
            "soy sauce",
            "dark soy sauce",
            "fish sauce",
            "oyster sauce",
            "hoisin sauce",
            "sweet chili sauce",
            "teriyaki sauce",
            "sriracha",
            "gochujang",
            "miso paste",
            "rice vinegar",
            "sesame oil",
            "sesame seeds",
            "chili oil",
            "mirin",
            "nori",
            "kombu",
            "tofu",
            "tempeh",
            "kimchi",
            "coconut milk",
            "red curry paste",
            "green curry paste",
            "panko",
            "rice paper",
            "wonton wrappers",
            "bamboo shoots",
            "water chestnuts",
            "five spice powder",
            "tapioca pearls",
        ],
    ),
    (
        CategoryId::IndianPantry,
        &[
            "turmeric",
            "cumin",
            "coriander",
            "coriander powder",
            "garam masala",
            "chaat masala",
            "tandoori masala",
            "pav bhaji masala",
            "biryani masala",
            "sambar powder",
            "rasam powder",
            "red chili powder",
            "kashmiri chili powder",
            "curry powder",
            "cardamom",
            "cinnamon",
            "cloves",
            "black pepper",
            "bay leaves",
            "fenugreek",
            "kasuri methi",
            "fennel seeds",
            "mustard seeds",
            "carom seeds",
            "nigella seeds",
            "asafoetida",
            "nutmeg",
            "saffron",
            "star anise",
            "amchur",
            "tamarind",
            "jaggery",
            "ghee",
            "mustard oil",
            "toor dal",
            "moong dal",
            "masoor dal",
            "chana dal",
            "urad dal",
            "lentils",
            "chickpeas",
            "kidney beans",
            "black eyed peas",
            "chickpea flour",
            "whole wheat flour",
            "semolina",
            "vermicelli",
            "papad",
            "mango pickle",
            "rose water",
        ],
    ),
    (
        CategoryId::MeatSeafood,
        &[
            "chicken",
            "chicken breast",
            "chicken thighs",
            "chicken wings",
            "whole chicken",
            "ground chicken",
            "beef",
            "ground beef",
            "steak",
            "pork",
            "pork chops",
            "bacon",
            "ham",
            "sausages",
            "lamb",
            "mutton",
            "goat meat",
            "turkey",
            "ground turkey",
            "salami",
            "pepperoni",
            "hot dogs",
            "fish",
            "salmon",
            "tuna",
            "cod",
            "tilapia",
            "sardines",
            "anchovies",
            "shrimp",
            "prawns",
            "crab",
            "lobster",
            "scallops",
            "squid",
            "mussels",
            "clams",
        ],
    ),
    (
        CategoryId::Dairy,
        &[
            "milk",
            "whole milk",
            "skim milk",
            "buttermilk",
            "condensed milk",
            "evaporated milk",
            "butter",
            "unsalted butter",
            "cheese",
            "cheddar cheese",
            "mozzarella",
            "parmesan cheese",
            "feta cheese",
            "swiss cheese",
            "goat cheese",
            "cream cheese",
            "cottage cheese",
            "ricotta",
            "brie",
            "paneer",
            "yogurt",
            "greek yogurt",
            "sour cream",
            "heavy cream",
            "whipping cream",
            "eggs",
            "egg whites",
        ],
    ),
    (
        CategoryId::Frozen,
        &[
            "ice cream",
            "frozen yogurt",
            "frozen peas",
            "frozen corn",
            "frozen berries",
            "frozen spinach",
            "frozen vegetables",
            "frozen pizza",
            "frozen dumplings",
            "frozen parathas",
            "frozen samosas",
            "frozen shrimp",
            "frozen waffles",
            "frozen edamame",
            "fish sticks",
            "french fries",
            "tater tots",
            "popsicles",
            "ice",
        ],
    ),
    (
        CategoryId::Beverages,
        &[
            "water",
            "sparkling water",
            "coconut water",
            "coffee",
            "instant coffee",
            "espresso",
            "tea",
            "green tea",
            "black tea",
            "iced tea",
            "chai",
            "orange juice",
            "apple juice",
            "lemonade",
            "soda",
            "cola",
            "ginger ale",
            "almond milk",
            "oat milk",
            "soy milk",
            "lassi",
            "kombucha",
            "energy drink",
            "sports drink",
            "hot chocolate",
            "beer",
            "red wine",
            "white wine",
            "sake",
        ],
    ),
    (
        CategoryId::Snacks,
        &[
            "chips",
            "potato chips",
            "tortilla chips",
            "pretzels",
            "popcorn",
            "crackers",
            "cookies",
            "biscuits",
            "chocolate",
            "dark chocolate",
            "candy",
            "gummy bears",
            "granola bars",
            "protein bars",
            "trail mix",
            "almonds",
            "cashews",
            "peanuts",
            "pistachios",
            "walnuts",
            "raisins",
            "peanut butter",
            "namkeen",
            "bhujia",
            "salsa",
            "hummus",
            "rice cakes",
        ],
    ),
    (
        CategoryId::Bakery,
        &[
            "bread",
            "white bread",
            "whole wheat bread",
            "sourdough bread",
            "multigrain bread",
            "bagels",
            "croissants",
            "muffins",
            "english muffins",
            "buns",
            "burger buns",
            "hot dog buns",
            "dinner rolls",
            "baguette",
            "brioche",
            "tortillas",
            "pita bread",
            "naan",
            "roti",
            "pav",
            "rusk",
            "cake",
            "donuts",
        ],
    ),
    (
        CategoryId::Other,
        &[
            "sugar",
            "brown sugar",
            "salt",
            "olive oil",
            "vegetable oil",
            "canola oil",
            "coconut oil",
            "all purpose flour",
            "baking soda",
            "baking powder",
            "yeast",
            "honey",
            "maple syrup",
            "vinegar",
            "apple cider vinegar",
            "ketchup",
            "mustard",
            "mayonnaise",
            "hot sauce",
            "pasta",
            "spaghetti",
            "penne",
            "macaroni",
            "pasta sauce",
            "tomato paste",
            "canned tomatoes",
            "oats",
            "cereal",
            "cornflakes",
            "quinoa",
            "couscous",
            "black beans",
            "pinto beans",
            "chicken broth",
            "vegetable broth",
            "vanilla extract",
            "cocoa powder",
            "jam",
            "toilet paper",
            "paper towels",
            "dish soap",
            "laundry detergent",
            "trash bags",
            "aluminum foil",
            "hand soap",
            "shampoo",
            "toothpaste",
            "tissues",
            "batteries",
        ],
    ),
];

/// Regional and transliterated names mapped to canonical names
pub(super) const LOCALIZATIONS: &[(&str, &str)] = &[
    // Hindi / Urdu
    ("aloo", "potatoes"),
    ("pyaz", "onions"),
    ("pyaaz", "onions"),
    ("tamatar", "tomatoes"),
    ("palak", "spinach"),
    ("gobi", "cauliflower"),
    ("phool gobi", "cauliflower"),
    ("patta gobi", "cabbage"),
    ("bhindi", "okra"),
    ("baingan", "eggplant"),
    ("brinjal", "eggplant"),
    ("adrak", "ginger"),
    ("lahsun", "garlic"),
    ("gajar", "carrots"),
    ("matar", "peas"),
    ("mooli", "radish"),
    ("karela", "bitter gourd"),
    ("lauki", "bottle gourd"),
    ("kaddu", "pumpkin"),
    ("shimla mirch", "bell pepper"),
    ("capsicum", "bell pepper"),
    ("hari mirch", "green chili"),
    ("mirchi", "green chili"),
    ("pudina", "mint"),
    ("dhania patta", "cilantro"),
    ("kadi patta", "curry leaves"),
    ("curry patta", "curry leaves"),
    ("methi", "fenugreek leaves"),
    ("nimbu", "lemons"),
    ("kela", "bananas"),
    ("seb", "apples"),
    ("aam", "mangoes"),
    ("anaar", "pomegranate"),
    ("angoor", "grapes"),
    ("nariyal", "coconut"),
    ("haldi", "turmeric"),
    ("jeera", "cumin"),
    ("dhania", "coriander"),
    ("elaichi", "cardamom"),
    ("dalchini", "cinnamon"),
    ("laung", "cloves"),
    ("kali mirch", "black pepper"),
    ("tej patta", "bay leaves"),
    ("saunf", "fennel seeds"),
    ("rai", "mustard seeds"),
    ("ajwain", "carom seeds"),
    ("kalonji", "nigella seeds"),
    ("hing", "asafoetida"),
    ("jaiphal", "nutmeg"),
    ("kesar", "saffron"),
    ("imli", "tamarind"),
    ("gud", "jaggery"),
    ("gur", "jaggery"),
    ("arhar dal", "toor dal"),
    ("rajma", "kidney beans"),
    ("chole", "chickpeas"),
    ("kabuli chana", "chickpeas"),
    ("lobia", "black eyed peas"),
    ("besan", "chickpea flour"),
    ("atta", "whole wheat flour"),
    ("maida", "all purpose flour"),
    ("suji", "semolina"),
    ("sooji", "semolina"),
    ("rava", "semolina"),
    ("sevai", "vermicelli"),
    ("poha", "flattened rice"),
    ("sabudana", "tapioca pearls"),
    ("chawal", "rice"),
    ("doodh", "milk"),
    ("dahi", "yogurt"),
    ("makhan", "butter"),
    ("anda", "eggs"),
    ("ande", "eggs"),
    ("murgh", "chicken"),
    ("murgi", "chicken"),
    ("gosht", "mutton"),
    ("machli", "fish"),
    ("jhinga", "prawns"),
    ("chini", "sugar"),
    ("namak", "salt"),
    ("shahad", "honey"),
    ("chai patti", "black tea"),
    ("badam", "almonds"),
    ("kaju", "cashews"),
    ("kishmish", "raisins"),
    ("moongphali", "peanuts"),
    // Regional English
    ("scallions", "spring onions"),
    ("green onions", "spring onions"),
    ("aubergine", "eggplant"),
    ("courgette", "zucchini"),
    ("coriander leaves", "cilantro"),
    ("rocket", "arugula"),
    ("beets", "beetroot"),
    ("garbanzo beans", "chickpeas"),
    ("crisps", "potato chips"),
    ("prawn crackers", "crackers"),
    ("minced beef", "ground beef"),
    ("mince", "ground beef"),
    ("double cream", "heavy cream"),
    ("fizzy drink", "soda"),
    ("pop", "soda"),
    ("plain flour", "all purpose flour"),
    ("icing sugar", "sugar"),
    ("tinned tomatoes", "canned tomatoes"),
    ("kitchen roll", "paper towels"),
    ("washing up liquid", "dish soap"),
    ("bin bags", "trash bags"),
    ("tin foil", "aluminum foil"),
    // Spanish
    ("leche", "milk"),
    ("queso", "cheese"),
    ("huevos", "eggs"),
    ("pollo", "chicken"),
    ("pan", "bread"),
    ("manzanas", "apples"),
    ("platanos", "bananas"),
    ("cebollas", "onions"),
    ("papas", "potatoes"),
    ("arroz", "rice"),
    // East / Southeast Asian
    ("shoyu", "soy sauce"),
    ("nam pla", "fish sauce"),
    ("pak choi", "bok choy"),
    ("daikon", "radish"),
    ("bean curd", "tofu"),
    ("doufu", "tofu"),
    ("mochi rice", "sticky rice"),
];

/// Known misspellings mapped to canonical names
pub(super) const MISSPELLINGS: &[(&str, &str)] = &[
    ("tumeric", "turmeric"),
    ("termeric", "turmeric"),
    ("brocoli", "broccoli"),
    ("brocolli", "broccoli"),
    ("bananna", "bananas"),
    ("banannas", "bananas"),
    ("tomatos", "tomatoes"),
    ("tomatoe", "tomatoes"),
    ("potatos", "potatoes"),
    ("potatoe", "potatoes"),
    ("avacado", "avocado"),
    ("avocado's", "avocado"),
    ("lettuse", "lettuce"),
    ("cabage", "cabbage"),
    ("cabbadge", "cabbage"),
    ("zuchini", "zucchini"),
    ("zucchinni", "zucchini"),
    ("cauliflour", "cauliflower"),
    ("spinnach", "spinach"),
    ("strawberrys", "strawberries"),
    ("blueberrys", "blueberries"),
    ("raspberrys", "raspberries"),
    ("cherrys", "cherries"),
    ("mangos", "mangoes"),
    ("pinapple", "pineapple"),
    ("watermellon", "watermelon"),
    ("asparagas", "asparagus"),
    ("brussel sprouts", "brussels sprouts"),
    ("cinamon", "cinnamon"),
    ("cinnamin", "cinnamon"),
    ("corriander", "coriander"),
    ("cumen", "cumin"),
    ("cummin", "cumin"),
    ("cardamon", "cardamom"),
    ("fenugreak", "fenugreek"),
    ("tamarand", "tamarind"),
    ("asafetida", "asafoetida"),
    ("garam masla", "garam masala"),
    ("basmathi rice", "basmati rice"),
    ("jasmin rice", "jasmine rice"),
    ("panner", "paneer"),
    ("yoghurt", "yogurt"),
    ("yogourt", "yogurt"),
    ("mozarella", "mozzarella"),
    ("mozzarela", "mozzarella"),
    ("parmesean", "parmesan cheese"),
    ("chedder", "cheddar cheese"),
    ("ricota", "ricotta"),
    ("sausage's", "sausages"),
    ("sasauges", "sausages"),
    ("chiken", "chicken"),
    ("shrimps", "shrimp"),
    ("salmonn", "salmon"),
    ("expresso", "espresso"),
    ("kombucha's", "kombucha"),
    ("tofoo", "tofu"),
    ("siracha", "sriracha"),
    ("ketchap", "ketchup"),
    ("catsup", "ketchup"),
    ("mayonaise", "mayonnaise"),
    ("mayo", "mayonnaise"),
    ("vinager", "vinegar"),
    ("spagetti", "spaghetti"),
    ("spaghettie", "spaghetti"),
    ("macaronni", "macaroni"),
    ("qinoa", "quinoa"),
    ("cereals", "cereal"),
    ("choclate", "chocolate"),
    ("chocolat", "chocolate"),
    ("pretzles", "pretzels"),
    ("crackerz", "crackers"),
    ("doughnuts", "donuts"),
    ("croissant's", "croissants"),
    ("baggels", "bagels"),
    ("tortilas", "tortillas"),
    ("toothpast", "toothpaste"),
    ("detergant", "laundry detergent"),
];
