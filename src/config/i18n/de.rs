pub(super) const STRINGS: &[(&str, &str)] = &[
    ("nick", "Benutzername"),
    ("nickError", "Der Benutzername muss mindestens 3 Bytes umfassen."),
    ("mail", "E-Mail"),
    ("mailError", "Bitte gib eine gültige E-Mail-Adresse an."),
    ("link", "Webseite"),
    ("optional", "Optional"),
    ("placeholder", "Kommentiere hier..."),
    ("sofa", "Noch keine Kommentare."),
    ("submit", "Senden"),
    ("like", "Gefällt mir"),
    ("cancelLike", "Gefällt mir nicht mehr"),
    ("reply", "Antworten"),
    ("cancelReply", "Antwort abbrechen"),
    ("comment", "Kommentare"),
    ("refresh", "Neu laden"),
    ("more", "Mehr laden..."),
    ("preview", "Vorschau"),
    ("emoji", "Emoji"),
    ("uploadImage", "Bild hochladen"),
    ("seconds", "Sekunden her"),
    ("minutes", "Minuten her"),
    ("hours", "Stunden her"),
    ("days", "Tage her"),
    ("now", "gerade eben"),
    ("uploading", "Hochladen"),
    ("login", "Anmelden"),
    ("logout", "Abmelden"),
    ("admin", "Administrator"),
    ("sticky", "Angeheftet"),
    ("word", "Wörter"),
    ("wordHint", "Bitte gib zwischen $0 und $1 Wörter ein!\nAktuelle Anzahl der Wörter: $2"),
    ("anonymous", "Anonym"),
    ("level0", "Zwerge"),
    ("level1", "Hobbits"),
    ("level2", "Ents"),
    ("level3", "Zauberer"),
    ("level4", "Elben"),
    ("level5", "Maiar"),
    ("gif", "GIF"),
    ("gifSearchPlaceholder", "GIF suchen"),
    ("profile", "Profil"),
    ("approved", "Genehmigt"),
    ("waiting", "Ausstehend"),
    ("spam", "Spam"),
    ("unsticky", "Nicht mehr anheften"),
    ("oldest", "Älteste"),
    ("latest", "Neueste"),
    ("hottest", "Beliebteste"),
    ("reactionTitle", "Was denkst du?"),
];
