mod list;
mod print;
