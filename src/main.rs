use urlhandle::UrlHandle;

fn main() {
    println!("urlhandle demo");
    println!("==============");

    let input = "https://shop.example.com/products?category=books&utm_source=newsletter";
    println!("\n1. Parsing: {}", input);

    let mut url = match UrlHandle::parse(input) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("   ✗ {}", e);
            return;
        }
    };

    println!("   scheme:   {}", url.scheme());
    println!("   host:     {}", url.host().unwrap_or("<none>"));
    println!("   path:     {}", url.path());
    println!("   fragment: {}", url.fragment().unwrap_or("<none>"));
    for (key, value) in url.params() {
        println!("   param:    {} = {}", key, value);
    }

    println!("\n2. Editing parameters:");
    url.remove_param("utm_source");
    println!("   removed 'utm_source'");

    match url.set_param("page", "2") {
        Ok(stored) => println!("   set 'page' to '{}'", stored),
        Err(e) => eprintln!("   ✗ {}", e),
    }

    match url.set_param(" Sort-By ", "most recent") {
        Ok(stored) => println!("   set dirty key ' Sort-By ' -> stored '{}'", stored),
        Err(e) => eprintln!("   ✗ {}", e),
    }

    match url.set_param(" ~#! ", "x") {
        Ok(stored) => println!("   set ' ~#! ' to '{}'", stored),
        Err(e) => println!("   ✗ rejected as expected: {}", e),
    }

    println!("\n3. Serialized: {}", url);
    println!("   original:   {}", url.original_url());
}
