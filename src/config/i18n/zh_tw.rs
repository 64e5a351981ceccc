pub(super) const STRINGS: &[(&str, &str)] = &[
    ("nick", "暱稱"),
    ("nickError", "暱稱不能少於3個字元"),
    ("mail", "郵箱"),
    ("mailError", "請填寫正確的郵件地址"),
    ("link", "網址"),
    ("optional", "可選"),
    ("placeholder", "歡迎留言"),
    ("sofa", "來發留言吧~"),
    ("submit", "送出"),
    ("like", "喜歡"),
    ("cancelLike", "取消喜歡"),
    ("reply", "回覆"),
    ("cancelReply", "取消回覆"),
    ("comment", "留言"),
    ("refresh", "重新整理"),
    ("more", "載入更多..."),
    ("preview", "預覽"),
    ("emoji", "表情"),
    ("uploadImage", "上傳圖片"),
    ("seconds", "秒前"),
    ("minutes", "分鐘前"),
    ("hours", "小時前"),
    ("days", "天前"),
    ("now", "剛剛"),
    ("uploading", "正在上傳"),
    ("login", "登入"),
    ("logout", "登出"),
    ("admin", "管理員"),
    ("sticky", "置頂"),
    ("word", "字"),
    ("wordHint", "留言字數應在 $0 到 $1 字之間！\n目前字數：$2"),
    ("anonymous", "匿名"),
    ("level0", "潛水"),
    ("level1", "冒泡"),
    ("level2", "吐槽"),
    ("level3", "活躍"),
    ("level4", "話癆"),
    ("level5", "傳說"),
    ("gif", "表情包"),
    ("gifSearchPlaceholder", "搜尋表情包"),
    ("profile", "個人資料"),
    ("approved", "通過"),
    ("waiting", "待審核"),
    ("spam", "垃圾"),
    ("unsticky", "取消置頂"),
    ("oldest", "最早"),
    ("latest", "最新"),
    ("hottest", "最熱"),
    ("reactionTitle", "你認為這篇文章怎麼樣？"),
];
