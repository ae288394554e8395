// src/config/consts.rs

// Remote sheet
pub const SHEET_ID: &str = "1VVm5MkdMzYF80dngcnHiBIWz7D1Sh0BnQeRvlKlA9DA";
pub const EXPORT_URL_PREFIX: &str = "https://docs.google.com/spreadsheets/d/";
pub const EXPORT_URL_SUFFIX: &str = "/export?format=csv";

// Net
pub const USER_AGENT: &str = concat!("cutoff_lookup/", env!("CARGO_PKG_VERSION"));
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Cache
pub const DEFAULT_TTL_SECS: u64 = 10;

// Columns (header labels in the sheet)
pub const COL_YEAR: &str = "學年度";
pub const COL_CODE: &str = "系校代碼";
pub const COL_SCHOOL: &str = "學校名稱";
pub const COL_PROGRAM: &str = "校系名稱";
pub const COL_QUOTA: &str = "招生名額";
pub const COL_CRITERIA: [&str; 5] = ["篩選一", "篩選二", "篩選三", "篩選四", "篩選五"];

// Log
pub const LOG_FILE: &str = ".store/debug.log";

// UI text
pub const APP_TITLE: &str = "112-114 個申最低錄取分數查詢";
pub const SEARCH_HINT: &str =
    "關鍵字搜尋不到時請打校系全名，中間留空格，例如輸入 `國立臺灣大學 資訊工程學系`。";
pub const SEARCH_PLACEHOLDER: &str = "例如：政大 心理";
pub const LOAD_FAILED_MSG: &str = "無法讀取資料庫，請確認 Google 試算表權限。";
pub const SYNCING_MSG: &str = "正在與雲端資料庫同步中...";
