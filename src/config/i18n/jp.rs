pub(super) const STRINGS: &[(&str, &str)] = &[
    ("nick", "ニックネーム"),
    ("nickError", "3バイト以上のニックネームをご入力ください."),
    ("mail", "メールアドレス"),
    ("mailError", "メールアドレスをご確認ください."),
    ("link", "サイト"),
    ("optional", "オプション"),
    ("placeholder", "ここにコメント"),
    ("sofa", "コメントしましょう~"),
    ("submit", "提出する"),
    ("like", "Like"),
    ("cancelLike", "Like キャンセル"),
    ("reply", "返信する"),
    ("cancelReply", "キャンセル"),
    ("comment", "コメント"),
    ("refresh", "更新"),
    ("more", "さらに読み込む..."),
    ("preview", "プレビュー"),
    ("emoji", "絵文字"),
    ("uploadImage", "画像をアップロード"),
    ("seconds", "秒前"),
    ("minutes", "分前"),
    ("hours", "時間前"),
    ("days", "日前"),
    ("now", "たっだ今"),
    ("uploading", "アップロード中"),
    ("login", "ログインする"),
    ("logout", "ログアウト"),
    ("admin", "管理者"),
    ("sticky", "トップに置く"),
    ("word", "文字"),
    ("wordHint", "コメントは $0 から $1 ワードの間でなければなりません!\n 現在の単語番号: $2"),
    ("anonymous", "匿名"),
    ("level0", "ドワーフ"),
    ("level1", "ホビット"),
    ("level2", "エント"),
    ("level3", "ウィザード"),
    ("level4", "エルフ"),
    ("level5", "マイアー"),
    ("gif", "GIF"),
    ("gifSearchPlaceholder", "GIF を検索"),
    ("profile", "プロフィール"),
    ("approved", "承認済み"),
    ("waiting", "審査待ち"),
    ("spam", "スパム"),
    ("unsticky", "キャンセル"),
    ("oldest", "一番古い"),
    ("latest", "最新"),
    ("hottest", "最も人気のある"),
    ("reactionTitle", "どう思いますか？"),
];
