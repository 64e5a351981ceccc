pub(super) const STRINGS: &[(&str, &str)] = &[
    ("nick", "Pseudo"),
    ("nickError", "Le pseudo ne peut pas faire moins de 3 octets."),
    ("mail", "E-mail"),
    ("mailError", "Veuillez confirmer votre adresse e-mail."),
    ("link", "Site Web"),
    ("optional", "Optionnel"),
    ("placeholder", "Commentez ici..."),
    ("sofa", "Aucun commentaire pour l'instant."),
    ("submit", "Envoyer"),
    ("like", "J'aime"),
    ("cancelLike", "Annuler le j'aime"),
    ("reply", "Répondre"),
    ("cancelReply", "Annuler la réponse"),
    ("comment", "Commentaires"),
    ("refresh", "Actualiser"),
    ("more", "Charger plus..."),
    ("preview", "Aperçu"),
    ("emoji", "Emoji"),
    ("uploadImage", "Télécharger une image"),
    ("seconds", "il y a quelques secondes"),
    ("minutes", "il y a quelques minutes"),
    ("hours", "il y a quelques heures"),
    ("days", "il y a quelques jours"),
    ("now", "à l'instant"),
    ("uploading", "Téléchargement en cours"),
    ("login", "Connexion"),
    ("logout", "Déconnexion"),
    ("admin", "Admin"),
    ("sticky", "Épinglé"),
    ("word", "Mots"),
    ("wordHint", "Veuillez saisir des commentaires entre $0 et $1 mots !\n Nombre actuel de mots : $2"),
    ("anonymous", "Anonyme"),
    ("level0", "Nains"),
    ("level1", "Hobbits"),
    ("level2", "Ents"),
    ("level3", "Mages"),
    ("level4", "Elfes"),
    ("level5", "Maïar"),
    ("gif", "GIF"),
    ("gifSearchPlaceholder", "Rechercher un GIF"),
    ("profile", "Profil"),
    ("approved", "Approuvé"),
    ("waiting", "En attente"),
    ("spam", "Indésirable"),
    ("unsticky", "Retirer l'épingle"),
    ("oldest", "Le plus ancien"),
    ("latest", "Dernier"),
    ("hottest", "Le plus populaire"),
    ("reactionTitle", "Qu'en pensez-vous ?"),
];
