pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-pink-500 to-fuchsia-600 hover:from-pink-600 hover:to-fuchsia-700 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-pink-600 dark:hover:text-pink-400 rounded-lg transition-colors duration-200";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-pink-500";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 text-pink-600 dark:text-pink-400";

// Wheel tabs
pub const TAB: &str = "px-4 py-2 rounded-t-lg text-sm font-medium text-gray-600 dark:text-gray-300 hover:text-pink-600 dark:hover:text-pink-400 transition-colors duration-200";
pub const TAB_ACTIVE: &str = "px-4 py-2 rounded-t-lg text-sm font-semibold bg-white dark:bg-gray-800 text-pink-700 dark:text-pink-300 border-b-2 border-pink-500";

// Segment editor
pub const SEGMENT_ROW: &str = "grid grid-cols-[2.5rem_3.5rem_1fr_7rem_2.5rem] items-center gap-2 py-1";
pub const COLOR_SWATCH: &str = "h-9 w-9 cursor-pointer rounded border border-gray-300 dark:border-gray-600";

// Winner popup
pub const POPUP_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/40 backdrop-blur-sm";
pub const POPUP_CARD: &str = "flex flex-col items-center gap-3 rounded-2xl px-10 py-8 shadow-2xl border-4 border-white animate-bounce";
