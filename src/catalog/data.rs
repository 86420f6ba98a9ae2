use super::BreedRecord;

pub const TITLE: &str = "Feline Fascination";

pub const INTRO: &str = "Cats are fascinating creatures that have been domesticated for thousands \
of years. They are known for their independence, agility, and affectionate nature. Cats come \
in various breeds, each with its unique characteristics and personalities.";

pub const BREEDS: &[BreedRecord] = &[
    BreedRecord {
        name: "Siamese",
        description: "Known for their distinctive coloring and vocal nature.",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
    },
    BreedRecord {
        name: "Maine Coon",
        description: "Large, gentle giants with long, fluffy coats.",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/Cat_November_2010-1a.jpg/1200px-Cat_November_2010-1a.jpg",
    },
    BreedRecord {
        name: "Persian",
        description: "Recognizable by their flat faces and long, luxurious fur.",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bb/Kittyply_edit1.jpg/1200px-Kittyply_edit1.jpg",
    },
    BreedRecord {
        name: "Bengal",
        description: "Wild-looking cats with leopard-like spots or marbling.",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/6/68/Orange_tabby_cat_sitting_on_fallen_leaves-Hisashi-01A.jpg/1200px-Orange_tabby_cat_sitting_on_fallen_leaves-Hisashi-01A.jpg",
    },
    BreedRecord {
        name: "Sphynx",
        description: "Hairless cats known for their wrinkled skin and affectionate personality.",
        // Only four images are bundled; Sphynx shares the first one.
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
    },
];

pub const FACTS: &[&str] = &[
    "Cats sleep for about 70% of their lives.",
    "A group of cats is called a \"clowder\".",
    "Cats have over 20 vocalizations, including the famous meow.",
    "A cat's sense of smell is 14 times stronger than a human's.",
    "Cats can jump up to six times their length.",
];
