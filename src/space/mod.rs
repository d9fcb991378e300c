mod resolver;


pub use resolver::SpaceResolver;
