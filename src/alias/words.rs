//! Word lists for `<slug>` parts.
//!
//! Every entry is lowercase ASCII so slugs are always valid in the local part
//! of an address.

pub(crate) const ADJECTIVES: &[&str] = &[
    "agile", "amber", "ancient", "arctic", "azure", "bold", "brave", "breezy", "bright", "calm",
    "candid", "cheerful", "clever", "cosmic", "crimson", "crisp", "curious", "daring", "dapper",
    "eager", "electric", "elegant", "fancy", "fearless", "fluffy", "fuzzy", "gentle", "gifted",
    "glossy", "golden", "graceful", "happy", "hidden", "humble", "icy", "jolly", "jovial", "keen",
    "kind", "lively", "lucky", "lunar", "magic", "mellow", "merry", "mighty", "misty", "modest",
    "nimble", "noble", "opal", "patient", "peppy", "placid", "plucky", "polite", "proud", "quick",
    "quiet", "radiant", "rapid", "rustic", "shiny", "silent", "silver", "sleek", "snowy", "solar",
    "sparkly", "spicy", "steady", "stellar", "sunny", "swift", "tidy", "tranquil", "trusty",
    "upbeat", "vivid", "warm", "wild", "wise", "witty", "zany", "zesty",
];

pub(crate) const NOUNS: &[&str] = &[
    "albatross", "alpaca", "badger", "beaver", "bison", "bobcat", "buffalo", "camel", "caribou",
    "cheetah", "chipmunk", "cobra", "condor", "coyote", "crane", "dingo", "dolphin", "eagle",
    "falcon", "ferret", "finch", "flamingo", "fox", "gazelle", "gecko", "gibbon", "giraffe",
    "gopher", "heron", "hedgehog", "ibex", "iguana", "impala", "jackal", "jaguar", "kestrel",
    "kiwi", "koala", "lemur", "leopard", "llama", "lobster", "lynx", "macaw", "mantis", "marmot",
    "meerkat", "mole", "moose", "narwhal", "newt", "ocelot", "octopus", "orca", "osprey", "otter",
    "owl", "panda", "panther", "parrot", "pelican", "penguin", "puffin", "quail", "rabbit",
    "raccoon", "raven", "salamander", "seal", "sparrow", "squid", "stork", "swan", "tapir",
    "tiger", "toucan", "turtle", "viper", "walrus", "weasel", "wombat", "yak", "zebra",
];
