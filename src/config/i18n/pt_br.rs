pub(super) const STRINGS: &[(&str, &str)] = &[
    ("nick", "Apelido"),
    ("nickError", "Apelido não pode ser menor que 3 bytes."),
    ("mail", "E-Mail"),
    ("mailError", "Por favor, confirme seu endereço de e-mail."),
    ("link", "Link"),
    ("optional", "opcional"),
    ("placeholder", "Comente aqui..."),
    ("sofa", "Nenhum comentário, ainda."),
    ("submit", "Enviar"),
    ("like", "Like"),
    ("cancelLike", "Cancelar like"),
    ("reply", "Responder"),
    ("cancelReply", "Cancelar resposta"),
    ("comment", "Comentários"),
    ("refresh", "Refrescar"),
    ("more", "Carregar Mais..."),
    ("preview", "Visualizar"),
    ("emoji", "Emoji"),
    ("uploadImage", "Enviar Imagem"),
    ("seconds", "segundos atrás"),
    ("minutes", "minutos atrás"),
    ("hours", "horas atrás"),
    ("days", "dias atrás"),
    ("now", "agora mesmo"),
    ("uploading", "Enviando"),
    ("login", "Entrar"),
    ("logout", "Sair"),
    ("admin", "Admin"),
    ("sticky", "Fixado"),
    ("word", "Palavras"),
    ("wordHint", "Por favor, insira entre $0 e $1 palavras!\n O número de palavras atual: $2"),
    ("anonymous", "Anônimo"),
    ("level0", "Anões"),
    ("level1", "Hobbits"),
    ("level2", "Ents"),
    ("level3", "Magos"),
    ("level4", "Elfos"),
    ("level5", "Maiar"),
    ("gif", "GIF"),
    ("gifSearchPlaceholder", "Pesquisar GIF"),
    ("profile", "Perfil"),
    ("approved", "Aprovado"),
    ("waiting", "Espera"),
    ("spam", "Spam"),
    ("unsticky", "Desafixar"),
    ("oldest", "Mais velho"),
    ("latest", "Mais recente"),
    ("hottest", "Mais quente"),
    ("reactionTitle", "O que você acha?"),
];
