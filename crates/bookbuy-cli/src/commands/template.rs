use bookbuy::models::request::DEFAULT_REQUEST_TEMPLATE;

pub fn execute() {
    println!("{}", DEFAULT_REQUEST_TEMPLATE);
}
