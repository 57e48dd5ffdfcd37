pub mod progmem;
