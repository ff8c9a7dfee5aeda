mod price;
mod record;
mod ticker;
mod trade_date;
mod window;

pub use price::Price;
pub use record::{PriceRecord, RawRow};
pub use ticker::Ticker;
pub use trade_date::TradeDate;
pub use window::{Window, WINDOW_LEN};
