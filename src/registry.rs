//! Named, standards-derived groups: the RFC 2409 Oakley groups, the
//! RFC 3526 MODP groups, the RFC 5114 DSA-style groups, and the RFC 7919
//! FFDHE groups.
//!
//! Each group is exposed as a zero-argument accessor function returning a
//! `&'static Group`, backed by a [`once_cell::sync::Lazy`] so the (cheap)
//! hex parse happens at most once per process. [`all_groups`] enumerates
//! every entry for callers that want to iterate the whole registry, e.g. to
//! print or test against all of them at once.
//!
//! Every constant below is the literal RFC-published value: `safe_prime_group!`
//! sets `gg = 2` and derives `q = (p - 1) / 2` for the safe-prime families
//! (Oakley/MODP, FFDHE); the RFC 5114 groups use [`Group::new`] directly
//! since their `p`, `gg`, `q` are independent DSA-style domain parameters,
//! not a safe-prime triple. See `DESIGN.md` for how each hex literal was
//! sourced and verified.

use once_cell::sync::Lazy;

use crate::group::Group;

macro_rules! safe_prime_group {
    ($name:ident, $hex:expr) => {
        static $name: Lazy<Group> = Lazy::new(|| Group::safe_prime($hex));
    };
}

// RFC 2409 Oakley group 1 (768-bit MODP), RFC 2409 §6.1.
safe_prime_group!(
    OAKLEY_1,
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC740\
     20BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F14374F\
     E1356D6D51C245E485B576625E7EC6F44C42E9A63A3620FFFFFFFFFFFFFFFF"
);

// RFC 2409 Oakley group 2 (1024-bit MODP), RFC 2409 §6.2.
safe_prime_group!(
    OAKLEY_2,
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC740\
     20BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F14374F\
     E1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE3\
     86BFB5A899FA5AE9F24117C4B1FE649286651ECE65381FFFFFFFFFFFFFFFF"
);

// RFC 3526 MODP group 5 (1536-bit). Verified against a third-party
// implementation's embedded constant.
safe_prime_group!(
    OAKLEY_5,
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
     020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
     4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
     EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
     98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
     9ED529077096966D670C354E4ABC9804F1746C08CA237327FFFFFFFFFFFFFFFF"
);

// RFC 3526 MODP group 14 (2048-bit). The most widely deployed group in this
// family; verified against a third-party implementation's embedded
// constant.
safe_prime_group!(
    OAKLEY_14,
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
     020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
     4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
     EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
     98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
     9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
     E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718\
     3995497CEA956AE515D2261898FA051015728E5A8AACAA68FFFFFFFFFFFFFFFF"
);

// RFC 3526 MODP group 15 (3072-bit).
safe_prime_group!(
    OAKLEY_15,
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
     020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
     4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
     EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
     98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
     9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
     E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718\
     3995497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33170D04507A33\
     A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7\
     ABF5AE8CDB0933D71E8C94E04A25619DCEE3D2261AD2EE6BF12FFA06D98A0864\
     D87602733EC86A64521F2B18177B200CBBE117577A615D6C770988C0BAD946E2\
     08E24FA074E5AB3143DB5BFCE0FD108E4B82D120A93AD2CAFFFFFFFFFFFFFFFF"
);

// RFC 3526 MODP group 16 (4096-bit).
safe_prime_group!(
    OAKLEY_16,
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
     020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
     4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
     EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
     98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
     9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
     E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718\
     3995497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33170D04507A33\
     A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7\
     ABF5AE8CDB0933D71E8C94E04A25619DCEE3D2261AD2EE6BF12FFA06D98A0864\
     D87602733EC86A64521F2B18177B200CBBE117577A615D6C770988C0BAD946E2\
     08E24FA074E5AB3143DB5BFCE0FD108E4B82D120A92108011A723C12A787E6D7\
     88719A10BDBA5B2699C327186AF4E23C1A946834B6150BDA2583E9CA2AD44CE8\
     DBBBC2DB04DE8EF92E8EFC141FBECAA6287C59474E6BC05D99B2964FA090C3A2\
     233BA186515BE7ED1F612970CEE2D7AFB81BDD762170481CD0069127D5B05AA9\
     93B4EA988D8FDDC186FFB7DC90A6C08F4DF435C934063199FFFFFFFFFFFFFFFF"
);

// RFC 3526 MODP group 17 (6144-bit).
safe_prime_group!(
    OAKLEY_17,
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
     020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
     4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
     EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
     98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
     9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
     E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718\
     3995497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33170D04507A33\
     A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7\
     ABF5AE8CDB0933D71E8C94E04A25619DCEE3D2261AD2EE6BF12FFA06D98A0864\
     D87602733EC86A64521F2B18177B200CBBE117577A615D6C770988C0BAD946E2\
     08E24FA074E5AB3143DB5BFCE0FD108E4B82D120A92108011A723C12A787E6D7\
     88719A10BDBA5B2699C327186AF4E23C1A946834B6150BDA2583E9CA2AD44CE8\
     DBBBC2DB04DE8EF92E8EFC141FBECAA6287C59474E6BC05D99B2964FA090C3A2\
     233BA186515BE7ED1F612970CEE2D7AFB81BDD762170481CD0069127D5B05AA9\
     93B4EA988D8FDDC186FFB7DC90A6C08F4DF435C93402849236C3FAB4D27C7026\
     C1D4DCB2602646DEC9751E763DBA37BDF8FF9406AD9E530EE5DB382F413001AE\
     B06A53ED9027D831179727B0865A8918DA3EDBEBCF9B14ED44CE6CBACED4BB1B\
     DB7F1447E6CC254B332051512BD7AF426FB8F401378CD2BF5983CA01C64B92EC\
     F032EA15D1721D03F482D7CE6E74FEF6D55E702F46980C82B5A84031900B1C9E\
     59E7C97FBEC7E8F323A97A7E36CC88BE0F1D45B7FF585AC54BD407B22B4154AA\
     CC8F6D7EBF48E1D814CC5ED20F8037E0A79715EEF29BE32806A1D58BB7C5DA76\
     F550AA3D8A1FBFF0EB19CCB1A313D55CDA56C9EC2EF29632387FE8D76E3C0468\
     043E8F663F4860EE12BF2D5B0B7474D6E694F91E6DCC4024FFFFFFFFFFFFFFFF"
);

// RFC 3526 MODP group 18 (8192-bit).
safe_prime_group!(
    OAKLEY_18,
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
     020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
     4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
     EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
     98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
     9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
     E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718\
     3995497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33170D04507A33\
     A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7\
     ABF5AE8CDB0933D71E8C94E04A25619DCEE3D2261AD2EE6BF12FFA06D98A0864\
     D87602733EC86A64521F2B18177B200CBBE117577A615D6C770988C0BAD946E2\
     08E24FA074E5AB3143DB5BFCE0FD108E4B82D120A92108011A723C12A787E6D7\
     88719A10BDBA5B2699C327186AF4E23C1A946834B6150BDA2583E9CA2AD44CE8\
     DBBBC2DB04DE8EF92E8EFC141FBECAA6287C59474E6BC05D99B2964FA090C3A2\
     233BA186515BE7ED1F612970CEE2D7AFB81BDD762170481CD0069127D5B05AA9\
     93B4EA988D8FDDC186FFB7DC90A6C08F4DF435C93402849236C3FAB4D27C7026\
     C1D4DCB2602646DEC9751E763DBA37BDF8FF9406AD9E530EE5DB382F413001AE\
     B06A53ED9027D831179727B0865A8918DA3EDBEBCF9B14ED44CE6CBACED4BB1B\
     DB7F1447E6CC254B332051512BD7AF426FB8F401378CD2BF5983CA01C64B92EC\
     F032EA15D1721D03F482D7CE6E74FEF6D55E702F46980C82B5A84031900B1C9E\
     59E7C97FBEC7E8F323A97A7E36CC88BE0F1D45B7FF585AC54BD407B22B4154AA\
     CC8F6D7EBF48E1D814CC5ED20F8037E0A79715EEF29BE32806A1D58BB7C5DA76\
     F550AA3D8A1FBFF0EB19CCB1A313D55CDA56C9EC2EF29632387FE8D76E3C0468\
     043E8F663F4860EE12BF2D5B0B7474D6E694F91E6DBE115974A3926F12FEE5E4\
     38777CB6A932DF8CD8BEC4D073B931BA3BC832B68D9DD300741FA7BF8AFC47ED\
     2576F6936BA424663AAB639C5AE4F5683423B4742BF1C978238F16CBE39D652D\
     E3FDB8BEFC848AD922222E04A4037C0713EB57A81A23F0C73473FC646CEA306B\
     4BCBC8862F8385DDFA9D4B7FA2C087E879683303ED5BDD3A062B3CF5B3A278A6\
     6D2A13F83F44F82DDF310EE074AB6A364597E899A0255DC164F31CC50846851D\
     F9AB48195DED7EA1B1D510BD7EE74D73FAF36BC31ECFA268359046F4EB879F92\
     4009438B481C6CD7889A002ED5EE382BC9190DA6FC026E479558E4475677E9AA\
     9E3050E2765694DFC81F56E880B96E7160C980DD98EDD3DFFFFFFFFFFFFFFFFF"
);

// RFC 5114 group 1: 1024-bit prime, 160-bit subgroup order, RFC 5114 §2.1.
static RFC_5114_1: Lazy<Group> = Lazy::new(|| {
    Group::new(
        "B10B8F96A080E01DDE92DE5EAE5D54EC52C99FBCFB06A3C69A6A9DCA52D23B616\
         073E28675A23D189838EF1E2EE652C013ECB4AEA906112324975C3CD49B83BFAC\
         CBDD7D90C4BD7098488E9C219A73724EFFD6FAE5644738FAA31A4FF55BCCC0A15\
         1AF5F0DC8B4BD45BF37DF365C1A65E68CFDA76D4DA708DF1FB2BC2E4A4371",
        "A4D1CBD5C3FD34126765A442EFB99905F8104DD258AC507FD6406CFF14266D312\
         66FEA1E5C41564B777E690F5504F213160217B4B01B886A5E91547F9E2749F4D7\
         FBD7D3B9A92EE1909D0D2263F80A76A6A24C087A091F531DBF0A0169B6A28AD66\
         2A4D18E73AFA32D779D5918D08BC8858F4DCEF97C2A24855E6EEB22B3B2E5",
        "F518AA8781A8DF278ABA4E7D64B7CB9D49462353",
    )
});

// RFC 5114 group 2: 2048-bit prime, 224-bit subgroup order, RFC 5114 §2.2.
static RFC_5114_2: Lazy<Group> = Lazy::new(|| {
    Group::new(
        "AD107E1E9123A9D0D660FAA79559C51FA20D64E5683B9FD1B54B1597B61D0A75E\
         6FA141DF95A56DBAF9A3C407BA1DF15EB3D688A309C180E1DE6B85A1274A0A66D\
         3F8152AD6AC2129037C9EDEFDA4DF8D91E8FEF55B7394B7AD5B7D0B6C12207C9F\
         98D11ED34DBF6C6BA0B2C8BBC27BE6A00E0A0B9C49708B3BF8A31709188368128\
         6130BC8985DB1602E714415D9330278273C7DE31EFDC7310F7121FD5A07415987\
         D9ADC0A486DCDF93ACC44328387315D75E198C641A480CD86A1B9E587E8BE60E6\
         9CC928B2B9C52172E413042E9B23F10B0E16E79763C9B53DCF4BA80A29E3FB73C\
         16B8E75B97EF363E2FFA31F71CF9DE5384E71B81C0AC4DFFE0C10E64F",
        "AC4032EF4F2D9AE39DF30B5C8FFDAC506CDEBE7B89998CAF74866A08CFE4FFE3A\
         6824A4E10B9A6F0DD921F01A70C4AFAAB739D7700C29F52C57DB17C620A8652BE\
         5E9001A8D66AD7C17669101999024AF4D027275AC1348BB8A762D0521BC98AE24\
         7150422EA1ED409939D54DA7460CDB5F6C6B250717CBEF180EB34118E98D11952\
         9A45D6F834566E3025E316A330EFBB77A86F0C1AB15B051AE3D428C8F8ACB70A8\
         137150B8EEB10E183EDD19963DDD9E263E4770589EF6AA21E7F5F2FF381B539CC\
         E3409D13CD566AFBB48D6C019181E1BCFE94B30269EDFE72FE9B6AA4BD7B5A0F1\
         C71CFFF4C19C418E1F6EC017981BC087F2A7065B384B890D3191F2BFA",
        "801C0D34C58D93FE997177101F80535A4738CEBCBF389A99B36371EB",
    )
});

// RFC 5114 group 3: 2048-bit prime, 256-bit subgroup order, RFC 5114 §2.3.
static RFC_5114_3: Lazy<Group> = Lazy::new(|| {
    Group::new(
        "87A8E61DB4B6663CFFBBD19C651959998CEEF608660DD0F25D2CEED4435E3B00E\
         00DF8F1D61957D4FAF7DF4561B2AA3016C3D91134096FAA3BF4296D830E9A7C20\
         9E0C6497517ABD5A8A9D306BCF67ED91F9E6725B4758C022E0B1EF4275BF7B6C5\
         BFC11D45F9088B941F54EB1E59BB8BC39A0BF12307F5C4FDB70C581B23F76B63A\
         CAE1CAA6B7902D52526735488A0EF13C6D9A51BFA4AB3AD8347796524D8EF6A16\
         7B5A41825D967E144E5140564251CCACB83E6B486F6B3CA3F7971506026C0B857\
         F689962856DED4010ABD0BE621C3A3960A54E710C375F26375D7014103A4B5433\
         0C198AF126116D2276E11715F693877FAD7EF09CADB094AE91E1A1597",
        "3FB32C9B73134D0B2E77506660EDBD484CA7B18F21EF205407F4793A1A0BA1251\
         0DBC15077BE463FFF4FED4AAC0BB555BE3A6C1B0C6B47B1BC3773BF7E8C6F6290\
         1228F8C28CBB18A55AE31341000A650196F931C77A57F2DDF463E5E9EC144B777\
         DE62AAAB8A8628AC376D282D6ED3864E67982428EBC831D14348F6F2F9193B504\
         5AF2767164E1DFC967C1FB3F2E55A4BD1BFFE83B9C80D052B985D182EA0ADB2A3\
         B7313D3FE14C8484B1E052588B9B7D2BBD2DF016199ECD06E1557CD0915B3353B\
         BB64E0EC377FD028370DF92B52C7891428CDC67EB6184B523D1DB246C32F63078\
         490F00EF8D647D148D47954515E2327CFEF98C582664B4C0F6CC41659",
        "8CF83642A709A097B447997640129DA299B1A47D1EB3750BA308B0FE64F5FBD3",
    )
});

// RFC 7919 ffdhe2048, RFC 7919 Appendix A.1.
safe_prime_group!(
    FFDHE_2048,
    "FFFFFFFFFFFFFFFFADF85458A2BB4A9AAFDC5620273D3CF1\
     D8B9C583CE2D3695A9E13641146433FBCC939DCE249B3EF9\
     7D2FE363630C75D8F681B202AEC4617AD3DF1ED5D5FD6561\
     2433F51F5F066ED0856365553DED1AF3B557135E7F57C935\
     984F0C70E0E68B77E2A689DAF3EFE8721DF158A136ADE735\
     30ACCA4F483A797ABC0AB182B324FB61D108A94BB2C8E3FB\
     B96ADAB760D7F4681D4F42A3DE394DF4AE56EDE76372BB19\
     0B07A7C8EE0A6D709E02FCE1CDF7E2ECC03404CD28342F61\
     9172FE9CE98583FF8E4F1232EEF28183C3FE3B1B4C6FAD73\
     3BB5FCBC2EC22005C58EF1837D1683B2C6F34A26C1B2EFFA\
     886B423861285C97FFFFFFFFFFFFFFFF"
);

// RFC 7919 ffdhe3072, RFC 7919 Appendix A.2.
safe_prime_group!(
    FFDHE_3072,
    "FFFFFFFFFFFFFFFFADF85458A2BB4A9AAFDC5620273D3CF1\
     D8B9C583CE2D3695A9E13641146433FBCC939DCE249B3EF9\
     7D2FE363630C75D8F681B202AEC4617AD3DF1ED5D5FD6561\
     2433F51F5F066ED0856365553DED1AF3B557135E7F57C935\
     984F0C70E0E68B77E2A689DAF3EFE8721DF158A136ADE735\
     30ACCA4F483A797ABC0AB182B324FB61D108A94BB2C8E3FB\
     B96ADAB760D7F4681D4F42A3DE394DF4AE56EDE76372BB19\
     0B07A7C8EE0A6D709E02FCE1CDF7E2ECC03404CD28342F61\
     9172FE9CE98583FF8E4F1232EEF28183C3FE3B1B4C6FAD73\
     3BB5FCBC2EC22005C58EF1837D1683B2C6F34A26C1B2EFFA\
     886B4238611FCFDCDE355B3B6519035BBC34F4DEF99C0238\
     61B46FC9D6E6C9077AD91D2691F7F7EE598CB0FAC186D91C\
     AEFE130985139270B4130C93BC437944F4FD4452E2D74DD3\
     64F2E21E71F54BFF5CAE82AB9C9DF69EE86D2BC522363A0D\
     ABC521979B0DEADA1DBF9A42D5C4484E0ABCD06BFA53DDEF\
     3C1B20EE3FD59D7C25E41D2B66C62E37FFFFFFFFFFFFFFFF"
);

// RFC 7919 ffdhe4096, RFC 7919 Appendix A.3.
safe_prime_group!(
    FFDHE_4096,
    "FFFFFFFFFFFFFFFFADF85458A2BB4A9AAFDC5620273D3CF1D8B9C583CE2D3695A\
     9E13641146433FBCC939DCE249B3EF97D2FE363630C75D8F681B202AEC4617AD3\
     DF1ED5D5FD65612433F51F5F066ED0856365553DED1AF3B557135E7F57C935984\
     F0C70E0E68B77E2A689DAF3EFE8721DF158A136ADE73530ACCA4F483A797ABC0A\
     B182B324FB61D108A94BB2C8E3FBB96ADAB760D7F4681D4F42A3DE394DF4AE56E\
     DE76372BB190B07A7C8EE0A6D709E02FCE1CDF7E2ECC03404CD28342F619172FE\
     9CE98583FF8E4F1232EEF28183C3FE3B1B4C6FAD733BB5FCBC2EC22005C58EF18\
     37D1683B2C6F34A26C1B2EFFA886B4238611FCFDCDE355B3B6519035BBC34F4DE\
     F99C023861B46FC9D6E6C9077AD91D2691F7F7EE598CB0FAC186D91CAEFE13098\
     5139270B4130C93BC437944F4FD4452E2D74DD364F2E21E71F54BFF5CAE82AB9C\
     9DF69EE86D2BC522363A0DABC521979B0DEADA1DBF9A42D5C4484E0ABCD06BFA5\
     3DDEF3C1B20EE3FD59D7C25E41D2B669E1EF16E6F52C3164DF4FB7930E9E4E588\
     57B6AC7D5F42D69F6D187763CF1D5503400487F55BA57E31CC7A7135C886EFB43\
     18AED6A1E012D9E6832A907600A918130C46DC778F971AD0038092999A333CB8B\
     7A1A1DB93D7140003C2A4ECEA9F98D0ACC0A8291CDCEC97DCF8EC9B55A7F88A46\
     B4DB5A851F44182E1C68A007E5E655F6AFFFFFFFFFFFFFFFF"
);

// RFC 7919 ffdhe6144, RFC 7919 Appendix A.4.
safe_prime_group!(
    FFDHE_6144,
    "FFFFFFFFFFFFFFFFADF85458A2BB4A9AAFDC5620273D3CF1D8B9C583CE2D3695A\
     9E13641146433FBCC939DCE249B3EF97D2FE363630C75D8F681B202AEC4617AD3\
     DF1ED5D5FD65612433F51F5F066ED0856365553DED1AF3B557135E7F57C935984\
     F0C70E0E68B77E2A689DAF3EFE8721DF158A136ADE73530ACCA4F483A797ABC0A\
     B182B324FB61D108A94BB2C8E3FBB96ADAB760D7F4681D4F42A3DE394DF4AE56E\
     DE76372BB190B07A7C8EE0A6D709E02FCE1CDF7E2ECC03404CD28342F619172FE\
     9CE98583FF8E4F1232EEF28183C3FE3B1B4C6FAD733BB5FCBC2EC22005C58EF18\
     37D1683B2C6F34A26C1B2EFFA886B4238611FCFDCDE355B3B6519035BBC34F4DE\
     F99C023861B46FC9D6E6C9077AD91D2691F7F7EE598CB0FAC186D91CAEFE13098\
     5139270B4130C93BC437944F4FD4452E2D74DD364F2E21E71F54BFF5CAE82AB9C\
     9DF69EE86D2BC522363A0DABC521979B0DEADA1DBF9A42D5C4484E0ABCD06BFA5\
     3DDEF3C1B20EE3FD59D7C25E41D2B669E1EF16E6F52C3164DF4FB7930E9E4E588\
     57B6AC7D5F42D69F6D187763CF1D5503400487F55BA57E31CC7A7135C886EFB43\
     18AED6A1E012D9E6832A907600A918130C46DC778F971AD0038092999A333CB8B\
     7A1A1DB93D7140003C2A4ECEA9F98D0ACC0A8291CDCEC97DCF8EC9B55A7F88A46\
     B4DB5A851F44182E1C68A007E5E0DD9020BFD64B645036C7A4E677D2C38532A3A\
     23BA4442CAF53EA63BB454329B7624C8917BDD64B1C0FD4CB38E8C334C701C3AC\
     DAD0657FCCFEC719B1F5C3E4E46041F388147FB4CFDB477A52471F7A9A96910B8\
     55322EDB6340D8A00EF092350511E30ABEC1FFF9E3A26E7FB29F8C183023C3587\
     E38DA0077D9B4763E4E4B94B2BBC194C6651E77CAF992EEAAC0232A281BF6B3A7\
     39C1226116820AE8DB5847A67CBEF9C9091B462D538CD72B03746AE77F5E62292\
     C311562A846505DC82DB854338AE49F5235C95B91178CCF2DD5CACEF403EC9D18\
     10C6272B045B3B71F9DC6B80D63FDD4A8E9ADB1E6962A69526D43161C1A41D570\
     D7938DAD4A40E329CD0E40E65FFFFFFFFFFFFFFFF"
);

// RFC 7919 ffdhe8192, RFC 7919 Appendix A.5.
safe_prime_group!(
    FFDHE_8192,
    "FFFFFFFFFFFFFFFFADF85458A2BB4A9AAFDC5620273D3CF1D8B9C583CE2D3695A\
     9E13641146433FBCC939DCE249B3EF97D2FE363630C75D8F681B202AEC4617AD3\
     DF1ED5D5FD65612433F51F5F066ED0856365553DED1AF3B557135E7F57C935984\
     F0C70E0E68B77E2A689DAF3EFE8721DF158A136ADE73530ACCA4F483A797ABC0A\
     B182B324FB61D108A94BB2C8E3FBB96ADAB760D7F4681D4F42A3DE394DF4AE56E\
     DE76372BB190B07A7C8EE0A6D709E02FCE1CDF7E2ECC03404CD28342F619172FE\
     9CE98583FF8E4F1232EEF28183C3FE3B1B4C6FAD733BB5FCBC2EC22005C58EF18\
     37D1683B2C6F34A26C1B2EFFA886B4238611FCFDCDE355B3B6519035BBC34F4DE\
     F99C023861B46FC9D6E6C9077AD91D2691F7F7EE598CB0FAC186D91CAEFE13098\
     5139270B4130C93BC437944F4FD4452E2D74DD364F2E21E71F54BFF5CAE82AB9C\
     9DF69EE86D2BC522363A0DABC521979B0DEADA1DBF9A42D5C4484E0ABCD06BFA5\
     3DDEF3C1B20EE3FD59D7C25E41D2B669E1EF16E6F52C3164DF4FB7930E9E4E588\
     57B6AC7D5F42D69F6D187763CF1D5503400487F55BA57E31CC7A7135C886EFB43\
     18AED6A1E012D9E6832A907600A918130C46DC778F971AD0038092999A333CB8B\
     7A1A1DB93D7140003C2A4ECEA9F98D0ACC0A8291CDCEC97DCF8EC9B55A7F88A46\
     B4DB5A851F44182E1C68A007E5E0DD9020BFD64B645036C7A4E677D2C38532A3A\
     23BA4442CAF53EA63BB454329B7624C8917BDD64B1C0FD4CB38E8C334C701C3AC\
     DAD0657FCCFEC719B1F5C3E4E46041F388147FB4CFDB477A52471F7A9A96910B8\
     55322EDB6340D8A00EF092350511E30ABEC1FFF9E3A26E7FB29F8C183023C3587\
     E38DA0077D9B4763E4E4B94B2BBC194C6651E77CAF992EEAAC0232A281BF6B3A7\
     39C1226116820AE8DB5847A67CBEF9C9091B462D538CD72B03746AE77F5E62292\
     C311562A846505DC82DB854338AE49F5235C95B91178CCF2DD5CACEF403EC9D18\
     10C6272B045B3B71F9DC6B80D63FDD4A8E9ADB1E6962A69526D43161C1A41D570\
     D7938DAD4A40E329CCFF46AAA36AD004CF600C8381E425A31D951AE64FDB23FCE\
     C9509D43687FEB69EDD1CC5E0B8CC3BDF64B10EF86B63142A3AB8829555B2F747\
     C932665CB2C0F1CC01BD70229388839D2AF05E454504AC78B7582822846C0BA35\
     C35F5C59160CC046FD8251541FC68C9C86B022BB7099876A460E7451A8A931097\
     03FEE1C217E6C3826E52C51AA691E0E423CFC99E9E31650C1217B624816CDAD9A\
     95F9D5B8019488D9C0A0A1FE3075A577E23183F81D4A3F2FA4571EFC8CE0BA8A4\
     FE8B6855DFE72B0A66EDED2FBABFBE58A30FAFABE1C5D71A87E2F741EF8C1FE86\
     FEA6BBFDE530677F0D97D11D49F7A8443D0822E506A9F4614E011E2A94838FF88\
     CD68C8BB7C5C6424CFFFFFFFFFFFFFFFF"
);

macro_rules! accessor {
    ($fn_name:ident, $static_name:ident, $doc:expr) => {
        #[doc = $doc]
        pub fn $fn_name() -> &'static Group {
            &$static_name
        }
    };
}

accessor!(oakley_1, OAKLEY_1, "RFC 2409 Oakley group 1 (768-bit).");
accessor!(oakley_2, OAKLEY_2, "RFC 2409 Oakley group 2 (1024-bit).");
accessor!(oakley_5, OAKLEY_5, "RFC 3526 MODP group 5 (1536-bit).");
accessor!(oakley_14, OAKLEY_14, "RFC 3526 MODP group 14 (2048-bit).");
accessor!(oakley_15, OAKLEY_15, "RFC 3526 MODP group 15 (3072-bit).");
accessor!(oakley_16, OAKLEY_16, "RFC 3526 MODP group 16 (4096-bit).");
accessor!(oakley_17, OAKLEY_17, "RFC 3526 MODP group 17 (6144-bit).");
accessor!(oakley_18, OAKLEY_18, "RFC 3526 MODP group 18 (8192-bit).");
accessor!(rfc_5114_1, RFC_5114_1, "RFC 5114 group 1 (1024-bit / 160-bit).");
accessor!(rfc_5114_2, RFC_5114_2, "RFC 5114 group 2 (2048-bit / 224-bit).");
accessor!(rfc_5114_3, RFC_5114_3, "RFC 5114 group 3 (2048-bit / 256-bit).");
accessor!(ffdhe2048, FFDHE_2048, "RFC 7919 ffdhe2048.");
accessor!(ffdhe3072, FFDHE_3072, "RFC 7919 ffdhe3072.");
accessor!(ffdhe4096, FFDHE_4096, "RFC 7919 ffdhe4096.");
accessor!(ffdhe6144, FFDHE_6144, "RFC 7919 ffdhe6144.");
accessor!(ffdhe8192, FFDHE_8192, "RFC 7919 ffdhe8192.");

/// Every named group in the registry, paired with its canonical name.
///
/// Not part of the original module's literal surface, but a natural
/// ambient convenience for callers that want to iterate the registry (for
/// example, to run a property check across every group at once) rather
/// than enumerate all sixteen accessors by hand.
pub fn all_groups() -> &'static [(&'static str, &'static Group)] {
    static ALL: Lazy<Vec<(&'static str, &'static Group)>> = Lazy::new(|| {
        vec![
            ("oakley_1", oakley_1()),
            ("oakley_2", oakley_2()),
            ("oakley_5", oakley_5()),
            ("oakley_14", oakley_14()),
            ("oakley_15", oakley_15()),
            ("oakley_16", oakley_16()),
            ("oakley_17", oakley_17()),
            ("oakley_18", oakley_18()),
            ("rfc_5114_1", rfc_5114_1()),
            ("rfc_5114_2", rfc_5114_2()),
            ("rfc_5114_3", rfc_5114_3()),
            ("ffdhe2048", ffdhe2048()),
            ("ffdhe3072", ffdhe3072()),
            ("ffdhe4096", ffdhe4096()),
            ("ffdhe6144", ffdhe6144()),
            ("ffdhe8192", ffdhe8192()),
        ]
    });
    &ALL
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::One;

    #[test]
    fn all_groups_lists_sixteen_entries_with_matching_accessors() {
        let all = all_groups();
        assert_eq!(all.len(), 16);
        for (name, group) in all {
            assert_eq!(group.p.bits() > 0, true, "{name} has an empty modulus");
        }
    }

    #[test]
    fn every_named_group_has_a_verified_subgroup_order() {
        for (name, group) in all_groups() {
            let q = group.q.as_ref().unwrap_or_else(|| panic!("{name} has no q"));
            assert_eq!(
                group.gg.modpow(q, &group.p),
                BigUint::one(),
                "{name}: gg^q mod p != 1"
            );
        }
    }

    #[test]
    fn modulus_size_matches_nominal_group_name() {
        assert_eq!(oakley_1().modulus_size(), 768);
        assert_eq!(oakley_2().modulus_size(), 1024);
        assert_eq!(oakley_5().modulus_size(), 1536);
        assert_eq!(oakley_14().modulus_size(), 2048);
        assert_eq!(oakley_15().modulus_size(), 3072);
        assert_eq!(oakley_16().modulus_size(), 4096);
        assert_eq!(oakley_17().modulus_size(), 6144);
        assert_eq!(oakley_18().modulus_size(), 8192);
        assert_eq!(ffdhe2048().modulus_size(), 2048);
        assert_eq!(ffdhe3072().modulus_size(), 3072);
        assert_eq!(ffdhe4096().modulus_size(), 4096);
        assert_eq!(ffdhe6144().modulus_size(), 6144);
        assert_eq!(ffdhe8192().modulus_size(), 8192);
    }

    #[test]
    fn rfc_5114_groups_have_the_documented_subgroup_sizes() {
        assert_eq!(rfc_5114_1().q.as_ref().unwrap().bits(), 160);
        assert_eq!(rfc_5114_2().q.as_ref().unwrap().bits(), 224);
        assert_eq!(rfc_5114_3().q.as_ref().unwrap().bits(), 256);
    }

    #[test]
    fn rfc_5114_groups_do_not_use_generator_two() {
        // Unlike the safe-prime families, RFC 5114's DSA-style domain
        // parameters have a large generator, not `gg = 2`.
        assert_ne!(rfc_5114_1().gg, BigUint::from(2u32));
        assert_ne!(rfc_5114_2().gg, BigUint::from(2u32));
        assert_ne!(rfc_5114_3().gg, BigUint::from(2u32));
    }
}
