pub(super) const STRINGS: &[(&str, &str)] = &[
    ("nick", "Biệt danh"),
    ("nickError", "Số lượng byte thấp nhất cho biệt danh là 3."),
    ("mail", "Email"),
    ("mailError", "Vui lòng xác nhập địa chỉ email của bạn."),
    ("link", "Trang web"),
    ("optional", "Tùy chọn"),
    ("placeholder", "Hãy để lại bình luận của bạn tại đây..."),
    ("sofa", "Chưa có bình luận."),
    ("submit", "Đăng"),
    ("like", "Thích"),
    ("cancelLike", "Bỏ thích"),
    ("reply", "Trả lời"),
    ("cancelReply", "Hủy bỏ"),
    ("comment", "Bình luận"),
    ("refresh", "Làm mới"),
    ("more", "Tải thêm..."),
    ("preview", "Xem trước"),
    ("emoji", "Emoji"),
    ("uploadImage", "Tải lên hình ảnh"),
    ("seconds", "giây trước"),
    ("minutes", "phút trước"),
    ("hours", "giờ trước"),
    ("days", "ngày trước"),
    ("now", "Vừa xong"),
    ("uploading", "Đang tải lên"),
    ("login", "Đăng nhập"),
    ("logout", "đăng xuất"),
    ("admin", "Quản trị"),
    ("sticky", "Đã ghim"),
    ("word", "Từ"),
    ("wordHint", "Bình luận phải có độ dài giữa $0 và $1 từ!\n Số từ hiện tại: $2"),
    ("anonymous", "Vô danh"),
    ("level0", "Người lùn"),
    ("level1", "Người tí hon"),
    ("level2", "Thần rừng"),
    ("level3", "Pháp sư"),
    ("level4", "Tiên tộc"),
    ("level5", "Maiar"),
    ("gif", "Ảnh GIF"),
    ("gifSearchPlaceholder", "Tìm kiếm ảnh GIF"),
    ("profile", "Thông tin cá nhân"),
    ("approved", "Đã phê duyệt"),
    ("waiting", "Đang chờ phê duyệt"),
    ("spam", "Không phù hợp"),
    ("unsticky", "Bỏ ghim"),
    ("oldest", "lâu nhất"),
    ("latest", "muộn nhất"),
    ("hottest", "nổi nhất"),
    ("reactionTitle", "Bạn cảm thấy thế nào?"),
];
