pub(super) const STRINGS: &[(&str, &str)] = &[
    ("nick", "NickName"),
    ("nickError", "NickName cannot be less than 3 bytes."),
    ("mail", "E-Mail"),
    ("mailError", "Please confirm your email address."),
    ("link", "Website"),
    ("optional", "Optional"),
    ("placeholder", "Comment here..."),
    ("sofa", "No comment yet."),
    ("submit", "Submit"),
    ("like", "Like"),
    ("cancelLike", "Cancel like"),
    ("reply", "Reply"),
    ("cancelReply", "Cancel reply"),
    ("comment", "Comments"),
    ("refresh", "Refresh"),
    ("more", "Load More..."),
    ("preview", "Preview"),
    ("emoji", "Emoji"),
    ("uploadImage", "Upload Image"),
    ("seconds", "seconds ago"),
    ("minutes", "minutes ago"),
    ("hours", "hours ago"),
    ("days", "days ago"),
    ("now", "just now"),
    ("uploading", "Uploading"),
    ("login", "Login"),
    ("logout", "logout"),
    ("admin", "Admin"),
    ("sticky", "Sticky"),
    ("word", "Words"),
    ("wordHint", "Please input comments between $0 and $1 words!\n Current word number: $2"),
    ("anonymous", "Anonymous"),
    ("level0", "Dwarves"),
    ("level1", "Hobbits"),
    ("level2", "Ents"),
    ("level3", "Wizards"),
    ("level4", "Elves"),
    ("level5", "Maiar"),
    ("gif", "GIF"),
    ("gifSearchPlaceholder", "Search GIF"),
    ("profile", "Profile"),
    ("approved", "Approved"),
    ("waiting", "Waiting"),
    ("spam", "Spam"),
    ("unsticky", "Unsticky"),
    ("oldest", "Oldest"),
    ("latest", "Latest"),
    ("hottest", "Hottest"),
    ("reactionTitle", "What do you think?"),
];
