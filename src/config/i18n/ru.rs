pub(super) const STRINGS: &[(&str, &str)] = &[
    ("nick", "Псевдоним"),
    ("nickError", "Никнейм не может быть меньше 3 символов."),
    ("mail", "Эл. адрес"),
    ("mailError", "Пожалуйста, подтвердите адрес вашей электронной почты."),
    ("link", "Веб-сайт"),
    ("optional", "Необязательный"),
    ("placeholder", "Комментарий здесь..."),
    ("sofa", "Пока нет комментариев."),
    ("submit", "Отправить"),
    ("like", "Like"),
    ("cancelLike", "Отменить лайк"),
    ("reply", "Ответить"),
    ("cancelReply", "Отменить ответ"),
    ("comment", "Комментарии"),
    ("refresh", "Обновить"),
    ("more", "Загрузить больше..."),
    ("preview", "Превью"),
    ("emoji", "Эмодзи"),
    ("uploadImage", "Загрузить изображение"),
    ("seconds", "секунд назад"),
    ("minutes", "несколько минут назад"),
    ("hours", "несколько часов назад"),
    ("days", "дней назад"),
    ("now", "прямо сейчас"),
    ("uploading", "Загрузка"),
    ("login", "Войти"),
    ("logout", "Выход из системы"),
    ("admin", "Админ"),
    ("sticky", "Липкий"),
    ("word", "Слова"),
    ("wordHint", "Пожалуйста, введите комментарии от $0 до $1 слов!\nНомер текущего слова: $2"),
    ("anonymous", "Анонимный"),
    ("level0", "Гномы"),
    ("level1", "Хоббиты"),
    ("level2", "Энты"),
    ("level3", "Волшебники"),
    ("level4", "Эльфы"),
    ("level5", "Майар"),
    ("gif", "GIF"),
    ("gifSearchPlaceholder", "Поиск GIF"),
    ("profile", "Профиль"),
    ("approved", "Одобренный"),
    ("waiting", "Ожидающий"),
    ("spam", "Спам"),
    ("unsticky", "Нелипкий"),
    ("oldest", "Самый старый"),
    ("latest", "Последний"),
    ("hottest", "Самый горячий"),
    ("reactionTitle", "Что вы думаете?"),
];
